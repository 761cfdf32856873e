/*
 * Responsibility
 * - ドメインサービスの公開インターフェース (re-export)
 */
pub mod auth;
pub mod identity;
