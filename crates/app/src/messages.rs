//! Notification text for each event.
//!
//! Kept together so the user-facing copy is reviewable in one place.

use statwatch_domain::{BarKind, HospitalNotice};
use statwatch_ports::outbound::PushMessage;

/// "Full Energy Bar" / "Full Nerve Bar" message.
pub fn bar_full(kind: BarKind) -> PushMessage {
    let body = match kind {
        BarKind::Energy => "Your energy is full, go spend on something!",
        BarKind::Nerve => "Your nerve is full, go do some crimes!",
    };
    PushMessage::new(format!("Full {} Bar", kind.label()), body)
}

/// Arrival notice for a travel destination.
pub fn travel_arriving(destination: &str) -> PushMessage {
    PushMessage::new(
        format!("Approaching {destination}!"),
        format!("You are about to land in {destination}!"),
    )
}

/// Message for a hospital lifecycle notice.
pub fn hospital(notice: HospitalNotice) -> PushMessage {
    match notice {
        HospitalNotice::Admitted => PushMessage::new(
            "Hospital admission",
            "You have been admitted to the hospital!",
        ),
        HospitalNotice::ReleaseSoon => PushMessage::new(
            "Hospital release",
            "You are about to be released from the hospital!",
        ),
        HospitalNotice::LeftEarly => PushMessage::new(
            "Out of hospital",
            "You left the hospital earlier than expected!",
        ),
    }
}
