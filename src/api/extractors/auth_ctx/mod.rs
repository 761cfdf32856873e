/*!
 * Security context plumbing
 *
 * Responsibility:
 * - ゲートが書き込む認証結果（AuthCtx）の型定義
 * - handler が Principal を受け取るための extractor
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx / AuthFailure
 * - PrincipalExtractor
 */

mod core;
mod types;

pub use core::PrincipalExtractor;
pub use types::{AuthCtx, AuthFailure};
