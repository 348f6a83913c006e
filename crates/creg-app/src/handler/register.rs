use super::Effect;
use crate::notice::Notice;
use crate::state::AppState;

/// Handle "Register for Courses".
///
/// Without a registrable selection this is a no-op apart from a notice,
/// matching a disabled button.
pub fn request_registration(state: &mut AppState) -> Effect {
    let validation = state.validation();
    if !validation.can_register {
        tracing::warn!(
            total = validation.total_credits,
            selected = validation.selected_count,
            state = validation.state.label(),
            "Registration not available"
        );
        state.push_notice(Notice::NotRegistrable);
        return Effect::None;
    }
    Effect::Submit(state.payload())
}
