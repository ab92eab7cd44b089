use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// A draw needs at least two people; with one there is no valid receiver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("at least two participants are required")]
    InsufficientParticipants,
}

const MAX_SHUFFLE_ATTEMPTS: usize = 100;

/// Draws a random giver→receiver pairing over `participants` such that
/// nobody is paired with themselves and everyone appears exactly once on
/// each side (a derangement of the participant set).
///
/// Strategy: shuffle a copy of the input and reject it if any position is
/// a fixed point. A uniform shuffle conditioned on "no fixed points" is
/// uniform over all derangements; the acceptance probability converges to
/// 1/e, so the expected attempt count is small and independent of n. The
/// loop is capped at `MAX_SHUFFLE_ATTEMPTS`; if the cap is ever exhausted
/// (probability roughly (1 - 1/e)^100, i.e. never in practice) the draw
/// falls back to rotating the input by a random non-zero offset. Any such
/// rotation is fixed-point-free, but it only reaches the n-1 cyclic
/// derangements rather than all of them, which is why it is the fallback
/// and not the main path.
///
/// Duplicate ids are a caller error and are not detected.
pub fn generate_assignments(
    participants: &[String],
) -> Result<HashMap<String, String>, AssignmentError> {
    if participants.len() < 2 {
        return Err(AssignmentError::InsufficientParticipants);
    }

    let mut rng = rand::thread_rng();
    let mut receivers: Vec<&String> = participants.iter().collect();

    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        receivers.shuffle(&mut rng);

        let deranged = participants
            .iter()
            .zip(receivers.iter())
            .all(|(giver, receiver)| giver != *receiver);

        if deranged {
            return Ok(participants
                .iter()
                .zip(receivers.iter())
                .map(|(giver, receiver)| (giver.clone(), (*receiver).clone()))
                .collect());
        }
    }

    let offset = rng.gen_range(1..participants.len());
    Ok(participants
        .iter()
        .enumerate()
        .map(|(i, giver)| {
            let receiver = &participants[(i + offset) % participants.len()];
            (giver.clone(), receiver.clone())
        })
        .collect())
}
