//! Client-side state: the displayed collection and the two-mode form.

use uuid::Uuid;

use quill_core::domain::Post;
use quill_shared::dto::PostPayload;

/// Which request a form submission will issue.
///
/// A tagged variant rather than a nullable id, so "editing nothing" is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new post.
    Create,
    /// Submitting updates the post with this id.
    Edit { id: Uuid },
}

/// The in-progress form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// A submission taken from the form: the payload plus the mode it was
/// submitted under.
#[derive(Debug)]
pub struct Submission {
    pub mode: FormMode,
    pub payload: PostPayload,
}

/// Client-side application state.
///
/// Owns the displayed collection and the transient form. Everything here
/// is discarded on exit; the Data Service holds the source of truth, and
/// after a failed request the two may drift apart.
pub struct App {
    pub posts: Vec<Post>,
    pub form: PostForm,
    pub mode: FormMode,
}

impl App {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            form: PostForm::default(),
            mode: FormMode::Create,
        }
    }

    /// Replace the displayed collection (the initial List).
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    /// Switch to edit-mode, pre-filling the form from the post at
    /// `index`. Out-of-range indexes leave the state untouched.
    pub fn begin_edit(&mut self, index: usize) -> Option<&Post> {
        let post = self.posts.get(index)?;
        self.form = PostForm {
            title: post.title.clone(),
            content: post.content.clone(),
        };
        self.mode = FormMode::Edit { id: post.id };
        Some(post)
    }

    /// Take the current form as a submission, resetting to create-mode.
    ///
    /// The reset happens before the request outcome is known: a failed
    /// create leaves the form cleared with nothing appended.
    pub fn take_submission(&mut self) -> Submission {
        let form = std::mem::take(&mut self.form);
        let mode = std::mem::replace(&mut self.mode, FormMode::Create);

        Submission {
            mode,
            payload: PostPayload {
                title: form.title,
                content: form.content,
            },
        }
    }

    /// Append a record returned by a successful Create.
    pub fn apply_created(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Replace the matching displayed record with one returned by a
    /// successful Update.
    pub fn apply_updated(&mut self, post: Post) {
        if let Some(existing) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post;
        }
    }

    /// Drop a record after a successful Delete.
    pub fn remove(&mut self, id: Uuid) {
        self.posts.retain(|p| p.id != id);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
