//! Target spawn factory.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use duckhunt_core::types::{FieldBounds, Position};

use crate::round::Target;

/// Spawn `count` targets at independent random positions inside the field.
/// Ids are taken from `next_target_id`, which is advanced past them.
pub fn spawn_targets(
    rng: &mut ChaCha8Rng,
    field: &FieldBounds,
    count: usize,
    next_target_id: &mut u32,
) -> Vec<Target> {
    (0..count)
        .map(|_| {
            let target_id = *next_target_id;
            *next_target_id = next_target_id.wrapping_add(1);
            Target {
                target_id,
                position: random_position(rng, field),
            }
        })
        .collect()
}

/// Uniform position in `[0, width) x [0, height)`. A degenerate field
/// collapses to the origin instead of panicking.
pub fn random_position(rng: &mut ChaCha8Rng, field: &FieldBounds) -> Position {
    let x = rng.gen::<f32>() * field.width.max(0.0);
    let y = rng.gen::<f32>() * field.height.max(0.0);
    Position::new(x, y)
}
