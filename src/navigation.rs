//! Navigation State
//!
//! Which screen is showing. Screens that need a target carry its id.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    List,
    /// Item detail (id)
    Detail(u32),
    /// Add form
    Add,
    /// Edit form (id)
    Edit(u32),
    /// Filter page
    Filter,
}

impl ViewState {
    /// Where the form's cancel button leads
    pub fn form_cancel_target(&self) -> ViewState {
        match self {
            ViewState::Edit(id) => ViewState::Detail(*id),
            _ => ViewState::List,
        }
    }
}
