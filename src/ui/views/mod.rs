pub mod delete_confirm;
pub mod edit_dialog;
pub mod not_found;
pub mod question_list;
pub mod quiz_select;
