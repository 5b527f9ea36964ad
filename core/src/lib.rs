pub mod construction;
pub mod dispatch;
pub mod lesson;
pub mod switch;
pub mod text_block;
