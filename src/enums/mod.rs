pub mod change_action;
pub mod replace_outcome;
