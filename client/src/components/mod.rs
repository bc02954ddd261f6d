//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render board and list chrome, dialogs, and feedback surfaces.
//! Pages own the network calls; components report intent through callbacks.

pub mod app_header;
pub mod board_card;
pub mod breadcrumb;
pub mod card_dialog;
pub mod dialogs;
pub mod kanban_board;
pub mod kanban_card;
pub mod loading_state;
pub mod members_dialog;
pub mod toast_host;
