//! Embassy async tasks
//!
//! Both tasks run on a high-priority interrupt executor so they preempt the
//! blocking main loop. The event task is the event context; the button task
//! only feeds it edges.

pub mod button;
pub mod events;

pub use button::button_task;
pub use events::event_task;
