//! Runtime module - drives messages through `update`
//!
//! The host owns the window and the event loop. It pushes translated events
//! onto an [`EventQueue`] and calls [`EventQueue::tick`] once per frame, then
//! performs the returned commands.

pub mod queue;

pub use queue::EventQueue;
