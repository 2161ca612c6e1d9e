//! UseCase: 通知送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - NotifyUseCase::execute() メソッド
//! - ログイン → ルーム検索 → メッセージ投稿 の順序と、失敗時の打ち切り
//!
//! ### なぜこのテストが必要か
//! - 途中のステップが失敗した場合、後続のステップが呼ばれないことを保証
//! - ChatService のエラーが NotifyError の正しい種別に変換されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：メッセージが投稿される
//! - 異常系：認証失敗、ルームが存在しない、投稿拒否、通信エラー

use std::sync::Arc;

use crate::domain::{ChatService, Credentials, MessageBody, PostedMessage, RoomName};

use super::error::NotifyError;

/// 通知送信のユースケース
pub struct NotifyUseCase {
    /// ChatService（外部チャットサービスの抽象化）
    service: Arc<dyn ChatService>,
}

impl NotifyUseCase {
    /// 新しい NotifyUseCase を作成
    pub fn new(service: Arc<dyn ChatService>) -> Self {
        Self { service }
    }

    /// 通知送信を実行
    ///
    /// # Arguments
    ///
    /// * `credentials` - ログイン情報
    /// * `room_name` - 投稿先ルーム名（完全一致で検索）
    /// * `message` - 投稿するメッセージ
    ///
    /// # Returns
    ///
    /// * `Ok(PostedMessage)` - 投稿されたメッセージ
    /// * `Err(NotifyError)` - いずれかのステップで失敗
    pub async fn execute(
        &self,
        credentials: &Credentials,
        room_name: &RoomName,
        message: &MessageBody,
    ) -> Result<PostedMessage, NotifyError> {
        // 1. ログイン
        let session = self.service.login(credentials).await?;
        tracing::debug!("Logged in as '{}'", credentials.email());

        // 2. ルーム名からルームを解決
        let room = self.service.find_room_by_name(&session, room_name).await?;
        tracing::debug!("Resolved room '{}' to id {}", room.name, room.id);

        // 3. メッセージを投稿
        let posted = self.service.paste(&session, &room, message).await?;
        tracing::info!("Posted message {} to room '{}'", posted.id, room.name);

        Ok(posted)
    }
}
