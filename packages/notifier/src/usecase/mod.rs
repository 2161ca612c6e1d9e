//! UseCase 層
//!
//! 通知処理のビジネスロジックを実装するレイヤー。
//! Notifier から呼び出され、ChatService（Domain 層の trait）を操作します。

pub mod error;
pub mod notify;

pub use error::NotifyError;
pub use notify::NotifyUseCase;
