//! ページの描画（handlebars）
//!
//! `{{ }}` の展開は handlebars が HTML エスケープするため、タイトルはそのまま渡してよい。

use crate::view::ViewState;
use handlebars::Handlebars;
use serde::Serialize;
use thiserror::Error;

const PAGE: &str = "page";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Todo List</title>
  <style>
    main { max-width: 40rem; margin: 0 auto; padding: 4rem 1rem; font-family: sans-serif; }
    .error { background: #fee2e2; border: 1px solid #f87171; color: #b91c1c; padding: .75rem 1rem; margin-bottom: 1rem; }
    .add { display: flex; margin-bottom: 1rem; }
    .add input { flex: 1; padding: .5rem; }
    ul { list-style: none; padding: 0; }
    li { display: flex; justify-content: space-between; align-items: center; padding: .75rem; border: 1px solid #ddd; margin-bottom: .5rem; }
    li.done { background: #f3f4f6; }
    .struck { text-decoration: line-through; color: #6b7280; }
    li form { display: inline; }
  </style>
</head>
<body>
<main>
  <section>
    <h1>Todo List</h1>
    {{#if error}}
    <div class="error" role="alert">{{error}}</div>
    {{/if}}
    <form class="add" method="post" action="/todos">
      <input type="text" name="title" value="{{new_todo}}" placeholder="Add a new todo" autocomplete="off"
        oninput="this.form.elements.add.disabled = !this.value.trim()"{{#if is_loading}} disabled{{/if}}>
      <button type="submit" name="add"{{#if add_disabled}} disabled{{/if}}>{{add_label}}</button>
    </form>
  </section>
  <section>
    {{#if show_placeholder}}
    <div class="placeholder">Loading todos...</div>
    {{else}}
    <ul>
      {{#each todos}}
      <li class="{{#if completed}}done{{/if}}">
        <form method="post" action="/todos/{{id}}/toggle">
          <input type="hidden" name="completed" value="{{completed}}">
          <label>
            <input type="checkbox" onchange="this.form.submit()"{{#if completed}} checked{{/if}}{{#if disabled}} disabled{{/if}}>
            <span{{#if completed}} class="struck"{{/if}}>{{title}}</span>
          </label>
        </form>
        <form method="post" action="/todos/{{id}}/delete">
          <button type="submit"{{#if disabled}} disabled{{/if}}>Delete</button>
        </form>
      </li>
      {{/each}}
    </ul>
    {{/if}}
  </section>
</main>
</body>
</html>
"#;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid page template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),
}

#[derive(Serialize)]
struct PageContext<'a> {
    error: Option<&'a str>,
    new_todo: &'a str,
    is_loading: bool,
    add_disabled: bool,
    add_label: &'static str,
    show_placeholder: bool,
    todos: Vec<ItemContext<'a>>,
}

#[derive(Serialize)]
struct ItemContext<'a> {
    id: i64,
    title: &'a str,
    completed: bool,
    disabled: bool,
}

impl<'a> From<&'a ViewState> for PageContext<'a> {
    fn from(state: &'a ViewState) -> Self {
        PageContext {
            error: state.error.as_deref().filter(|e| !e.is_empty()),
            new_todo: &state.new_todo,
            is_loading: state.is_loading,
            add_disabled: !state.can_submit(),
            add_label: if state.is_loading { "Adding..." } else { "Add" },
            show_placeholder: state.shows_loading_placeholder(),
            todos: state
                .todos
                .iter()
                .map(|todo| ItemContext {
                    id: todo.id.as_i64(),
                    title: &todo.title,
                    completed: todo.completed,
                    disabled: state.is_loading,
                })
                .collect(),
        }
    }
}

pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(PAGE, PAGE_TEMPLATE)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    pub fn render(&self, state: &ViewState) -> Result<String, RenderError> {
        Ok(self.registry.render(PAGE, &PageContext::from(state))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{Todo, TodoId};

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::new(id),
            title: title.to_string(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn render(state: &ViewState) -> String {
        PageRenderer::new().unwrap().render(state).unwrap()
    }

    #[test]
    fn renders_items_with_checkbox_title_and_delete() {
        let state = ViewState {
            todos: vec![todo(2, "Walk dog", true), todo(1, "Buy milk", false)],
            ..ViewState::default()
        };
        let html = render(&state);

        assert!(html.contains(r#"action="/todos/2/toggle""#));
        assert!(html.contains(r#"action="/todos/1/delete""#));
        assert!(html.contains(r#"<span class="struck">Walk dog</span>"#));
        assert!(html.contains("<span>Buy milk</span>"));
        assert_eq!(html.matches(" checked").count(), 1);
        assert_eq!(html.matches(">Delete</button>").count(), 2);
        assert!(html.contains(r#"<li class="done">"#));
        assert!(!html.contains("Loading todos..."));
        assert!(!html.contains(r#"role="alert""#));
    }

    #[test]
    fn escapes_titles_and_error() {
        let state = ViewState {
            todos: vec![todo(1, "<script>alert(1)</script>", false)],
            error: Some("<b>boom</b>".into()),
            new_todo: r#""quoted""#.into(),
            ..ViewState::default()
        };
        let html = render(&state);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;boom"));
        assert!(!html.contains(r#"value=""quoted"""#));
    }

    #[test]
    fn shows_error_banner_when_present() {
        let state = ViewState {
            error: Some("HTTP error! status: 500".into()),
            ..ViewState::default()
        };
        assert!(render(&state).contains(r#"<div class="error" role="alert">HTTP error! status: 500</div>"#));
    }

    #[test]
    fn loading_disables_controls_and_shows_placeholder() {
        let mut state = ViewState {
            is_loading: true,
            new_todo: "Task".into(),
            ..ViewState::default()
        };
        let html = render(&state);
        assert!(html.contains("Loading todos..."));
        assert!(html.contains("Adding..."));
        assert!(html.contains(r#"name="add" disabled"#));

        state.todos = vec![todo(1, "A", false)];
        let html = render(&state);
        assert!(!html.contains("Loading todos..."));
        assert!(html.contains(">Delete</button>") && html.contains(r#"<button type="submit" disabled>Delete"#));
    }

    #[test]
    fn add_button_enabled_only_for_non_blank_input() {
        let mut state = ViewState::default();
        let html = render(&state);
        assert!(html.contains(r#"name="add" disabled>Add</button>"#));

        state.new_todo = "Buy milk".into();
        let html = render(&state);
        assert!(html.contains(r#"name="add">Add</button>"#));
        assert!(html.contains(r#"value="Buy milk""#));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn titles_never_inject_markup(title in "[<>&\"'a-z ]{1,40}") {
                let state = ViewState {
                    todos: vec![todo(1, &title, false)],
                    ..ViewState::default()
                };
                let html = render(&state);
                let start = html.find("<span>").unwrap() + "<span>".len();
                let end = start + html[start..].find("</span>").unwrap();
                let rendered = &html[start..end];
                prop_assert!(!rendered.contains('<'));
                prop_assert!(!rendered.contains('>'));
                prop_assert!(!rendered.contains('"'));
            }
        }
    }
}
