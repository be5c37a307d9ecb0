use crate::domain::model::{Assignment, Blacklist, Pairing, Participant};
use crate::utils::error::{Result, SantaError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Upper bound on rejection-sampling attempts. For small groups with sparse
/// blacklists a valid shuffle is found almost immediately; hitting this cap
/// means the constraints leave no valid pairing (or close to none).
const MAX_ATTEMPTS: u32 = 10_000;

/// Produce a random pairing in which nobody is assigned to themselves and
/// no giver/recipient pair appears in the blacklist in either direction.
///
/// Candidates are uniform random permutations, so rejection keeps the
/// result uniform over all valid pairings.
pub fn generate(participants: &[Participant], blacklist: &Blacklist) -> Result<Pairing> {
    generate_with_rng(participants, blacklist, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    participants: &[Participant],
    blacklist: &Blacklist,
    rng: &mut R,
) -> Result<Pairing> {
    let mut recipients: Vec<Participant> = participants.to_vec();

    for attempt in 1..=MAX_ATTEMPTS {
        recipients.shuffle(rng);

        if is_valid_pairing(participants, &recipients, blacklist) {
            tracing::debug!("Found a valid pairing on attempt {}", attempt);
            let assignments = participants
                .iter()
                .cloned()
                .zip(recipients)
                .map(|(giver, recipient)| Assignment { giver, recipient })
                .collect();
            return Ok(Pairing { assignments });
        }
    }

    Err(SantaError::InfeasibleConstraints {
        attempts: MAX_ATTEMPTS,
    })
}

fn is_valid_pairing(
    givers: &[Participant],
    recipients: &[Participant],
    blacklist: &Blacklist,
) -> bool {
    givers
        .iter()
        .zip(recipients)
        .all(|(giver, recipient)| giver != recipient && !blacklist.forbids(giver, recipient))
}
