/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - 認証パイプラインは auth::apply、transport 系は http::apply / cors::apply
 */
pub mod auth;
pub mod cors;
pub mod http;
