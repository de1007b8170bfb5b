//! Module trait for panels that own their own key handling

use crossterm::event::KeyEvent;

use super::{Action, Context};

pub trait Module {
    fn id(&self) -> &'static str;

    /// Handle keyboard input and describe what should happen
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut Context) -> Action;
}
