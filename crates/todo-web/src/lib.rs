//! Todo 一覧の Web UI
//!
//! ビュー（状態と操作）、todo-api クライアント、ページ描画、配信用ルータで構成されます。

pub mod client;
pub mod host;
pub mod render;
pub mod view;

pub use client::{ClientError, HttpTodoApi, TodoApi};
pub use host::{app, WebState};
pub use render::PageRenderer;
pub use view::{Dispatch, TodoView, ViewState};
