//! Todo 一覧ビューの状態と操作
//!
//! 状態遷移は idle → loading → (成功: idle・一覧更新) | (失敗: idle・エラー表示) のみ。
//! 変更系の操作の後は必ず一覧を取り直し、ローカルでの予測更新は行いません。

use crate::client::{ClientError, TodoApi};
use domain::{is_submittable_title, Todo, TodoId};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::error;

/// ビューが保持する状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// 最後に成功した一覧取得の結果
    pub todos: Vec<Todo>,
    /// 新規 Todo 入力欄のテキスト
    pub new_todo: String,
    pub is_loading: bool,
    pub error: Option<String>,
    /// 一覧取得が一度でも成功したか
    pub(crate) mounted: bool,
}

impl ViewState {
    /// 追加ボタンが押せるか
    pub fn can_submit(&self) -> bool {
        !self.is_loading && is_submittable_title(&self.new_todo)
    }

    /// 一覧の代わりに「読み込み中」を表示するか
    pub fn shows_loading_placeholder(&self) -> bool {
        self.is_loading && self.todos.is_empty()
    }
}

/// 操作の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Completed,
    Failed,
    /// 他の操作が実行中、または入力が空のため何もしなかった
    Skipped,
}

pub struct TodoView {
    api: Arc<dyn TodoApi>,
    // API 呼び出しの await をまたいでロックを保持しないこと
    state: Mutex<ViewState>,
}

impl TodoView {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// 現在の状態のコピー（描画用）
    pub async fn snapshot(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// 初回表示時の一覧取得
    ///
    /// 一覧取得が成功するまでは呼ばれるたびに取り直す。成功後は何もしない。
    pub async fn mount(&self) -> Dispatch {
        {
            let mut state = self.state.lock().await;
            if state.mounted || state.is_loading {
                return Dispatch::Skipped;
            }
            state.is_loading = true;
        }
        let outcome = self.fetch_todos().await;
        self.finish().await;
        outcome
    }

    /// 入力欄の更新
    pub async fn set_new_todo(&self, text: impl Into<String>) {
        self.state.lock().await.new_todo = text.into();
    }

    /// 入力中のタイトルで Todo を作成し、入力欄を空にして一覧を取り直す
    pub async fn add_todo(&self) -> Dispatch {
        let title = {
            let mut state = self.state.lock().await;
            if !state.can_submit() {
                return Dispatch::Skipped;
            }
            state.is_loading = true;
            state.new_todo.clone()
        };

        let outcome = match self.api.create(&title).await {
            Ok(_) => {
                self.state.lock().await.new_todo.clear();
                self.fetch_todos().await
            }
            Err(err) => {
                error!(error = %err, "Error adding todo");
                self.fail(failure_message(&err, "Failed to add todo")).await
            }
        };
        self.finish().await;
        outcome
    }

    /// `completed` は表示中の値。反転した値を送る
    pub async fn toggle_todo(&self, id: TodoId, completed: bool) -> Dispatch {
        if !self.begin().await {
            return Dispatch::Skipped;
        }

        let outcome = match self.api.set_completed(id, !completed).await {
            Ok(_) => self.fetch_todos().await,
            Err(err) => {
                error!(error = %err, %id, "Error updating todo");
                self.fail(failure_message(&err, "Failed to update todo")).await
            }
        };
        self.finish().await;
        outcome
    }

    pub async fn delete_todo(&self, id: TodoId) -> Dispatch {
        if !self.begin().await {
            return Dispatch::Skipped;
        }

        let outcome = match self.api.delete(id).await {
            Ok(_) => self.fetch_todos().await,
            Err(err) => {
                error!(error = %err, %id, "Error deleting todo");
                self.fail(failure_message(&err, "Failed to delete todo")).await
            }
        };
        self.finish().await;
        outcome
    }

    /// ローディングフラグを立てる。既に立っていれば false
    async fn begin(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.is_loading {
            return false;
        }
        state.is_loading = true;
        true
    }

    async fn finish(&self) {
        self.state.lock().await.is_loading = false;
    }

    async fn fail(&self, message: String) -> Dispatch {
        self.state.lock().await.error = Some(message);
        Dispatch::Failed
    }

    /// 一覧の取り直し。開始時にエラー表示を消す
    async fn fetch_todos(&self) -> Dispatch {
        self.state.lock().await.error = None;

        match self.api.list().await {
            Ok(todos) => {
                let mut state = self.state.lock().await;
                state.todos = todos;
                state.mounted = true;
                Dispatch::Completed
            }
            Err(err) => {
                error!(error = %err, "Error fetching todos");
                self.fail(err.to_string()).await
            }
        }
    }
}

/// 応答ステータスによる失敗は操作ごとの固定文言、通信エラーはそのメッセージ
fn failure_message(err: &ClientError, on_status: &str) -> String {
    match err {
        ClientError::Status(_) => on_status.to_string(),
        ClientError::Transport(e) => e.to_string(),
    }
}
