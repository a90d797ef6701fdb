//! Components, bundles and resources shared by the gameplay systems.

use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum_macros::AsRefStr;

use crate::constants::cosmetics::{COLORS, POSTER_TEXTS, PROTEST_PHRASES};
use crate::map::direction::Direction;
use crate::systems::movement::{Position, Velocity};

/// The player-controlled character.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Half-width of the collision hitbox.
    pub radius: f32,
    /// Speed before the difficulty multiplier.
    pub base_speed: f32,
}

/// The most recent directional request for the player.
///
/// Overwritten by each new input and never cleared by a failed turn, so a blocked
/// request is retried every tick until it fits.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingIntent(pub Option<Direction>);

/// A roaming adversary. Its [`Position`] is the top-left corner of a tile-sized box.
#[derive(Component, Debug, Clone, Copy)]
pub struct Protester {
    /// Speed before the difficulty multiplier.
    pub base_speed: f32,
}

/// How a protester is drawn. Has no effect on movement.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    /// Carries a placard with a slogan.
    Poster,
    /// Waves both arms.
    Hands,
}

/// Per-protester animation inputs, drawn from the cosmetic random stream.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Cosmetics {
    /// Phase offset in `[0, 1)` for walk cycles and speech bubble timing.
    pub seed: f32,
    /// Index into [`COLORS`].
    pub color: usize,
    /// Index into [`POSTER_TEXTS`].
    pub poster_text: usize,
}

impl Cosmetics {
    /// Rolls a fresh set of cosmetics, optionally pinning the color.
    pub fn roll(rng: &mut impl Rng, color: Option<usize>) -> Self {
        Self {
            seed: rng.random::<f32>(),
            color: color.unwrap_or_else(|| rng.random_range(0..COLORS.len())),
            poster_text: rng.random_range(0..POSTER_TEXTS.len()),
        }
    }

    pub fn color(&self) -> &'static str {
        COLORS[self.color % COLORS.len()]
    }

    pub fn poster_text(&self) -> &'static str {
        POSTER_TEXTS[self.poster_text % POSTER_TEXTS.len()]
    }

    /// The phrase shown in this protester's speech bubble.
    pub fn phrase(&self) -> &'static str {
        let index = (self.seed * PROTEST_PHRASES.len() as f32) as usize;
        PROTEST_PHRASES[index.min(PROTEST_PHRASES.len() - 1)]
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub position: Position,
    pub velocity: Velocity,
    pub intent: PendingIntent,
}

#[derive(Bundle)]
pub struct ProtesterBundle {
    pub protester: Protester,
    pub position: Position,
    pub velocity: Velocity,
    pub category: Category,
    pub cosmetics: Cosmetics,
}

/// The player's score.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Seconds elapsed this frame, already clamped.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// Random source for every gameplay decision (turns, spawns).
#[derive(Resource, Debug, Clone)]
pub struct GameplayRng(pub StdRng);

/// Random source for visual-only attributes. Kept apart from [`GameplayRng`] so
/// cosmetics never shift gameplay outcomes.
#[derive(Resource, Debug, Clone)]
pub struct CosmeticRng(pub StdRng);

impl GameplayRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl CosmeticRng {
    /// Salt mixed into the game seed so the two streams differ.
    const SALT: u64 = 0x9E37_79B9_7F4A_7C15;

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed ^ Self::SALT))
    }
}
