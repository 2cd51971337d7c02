use crate::chat::SessionId;

/// Side effects the event handler cannot perform itself.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    ScheduleReply { session: SessionId },
    Quit,
}
