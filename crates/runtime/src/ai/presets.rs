//! Ready-made monster brains.
//!
//! Each [`AiKind`] builds the tree a monster script of that kind compiles to.
//! The script form is kept next to each builder for reference.

use behavior_tree::builder::{condition, failure, repeat, selector, sequence, task, tree};
use behavior_tree::{Node, Root};
use game_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::ai::AiContext;
use crate::ai::conditions::{chance, hp_low, player_in_range, player_visible};
use crate::ai::tasks::{
    AttackBasic, ChaseTarget, DrinkPotion, GotoRemembered, Idle, MineTunnel, MoveAway, PickItems,
    PotionPreference, RandomMove, RememberTarget,
};

/// Turns a guard spends watching before it goes to look.
pub const GUARD_WATCH_TURNS: u32 = 3;

/// Chance per turn that an idle miner digs.
pub const MINER_DIG_CHANCE: u32 = 50;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum AiKind {
    /// Attacks when adjacent, chases when it sees the player, wanders otherwise.
    Basic,
    /// Like `Basic` but remembers where the player was last seen.
    Smart,
    /// Keeps its distance and drinks potions when hurt; fights when cornered.
    Coward,
    /// Digs tunnels and collects loot until the player shows up.
    Miner,
    /// Stands watch and periodically walks to where the player was.
    Guard,
}

impl AiKind {
    pub fn build(self, config: &GameConfig) -> Root<AiContext> {
        let body = match self {
            AiKind::Basic => basic(config),
            AiKind::Smart => smart(config),
            AiKind::Coward => coward(config),
            AiKind::Miner => miner(config),
            AiKind::Guard => guard(config),
        };
        tree(body)
    }
}

fn adjacent(child: Node<AiContext>) -> Node<AiContext> {
    condition(player_in_range(1), Some(child))
}

fn in_aggro_range(config: &GameConfig, child: Node<AiContext>) -> Node<AiContext> {
    condition(player_in_range(config.aggro_range), Some(child))
}

fn visible(child: Node<AiContext>) -> Node<AiContext> {
    condition(player_visible(), Some(child))
}

fn hurt(config: &GameConfig, child: Node<AiContext>) -> Node<AiContext> {
    condition(hp_low(config.hp_low_percent), Some(child))
}

fn wander_or_idle() -> [Node<AiContext>; 2] {
    [task(RandomMove), task(Idle)]
}

/// ```text
/// [SEL]
///   [COND player_in_range]
///     [COND player_visible]
///       [SEL]
///         [COND player_in_range 1]
///           [TASK attack_basic]
///         [TASK chase_player]
///   [TASK move_rnd]
///   [TASK idle]
/// ```
fn basic(config: &GameConfig) -> Node<AiContext> {
    let engage = selector(vec![
        adjacent(task(AttackBasic::new())),
        task(ChaseTarget::new()),
    ]);

    let mut children = vec![in_aggro_range(config, visible(engage))];
    children.extend(wander_or_idle());
    selector(children)
}

/// ```text
/// [SEL]
///   [COND player_in_range]
///     [SEL]
///       [COND player_visible]
///         [SEQ]
///           [TASK save_player_pos]
///           [SEL]
///             [COND player_in_range 1]
///               [TASK attack_basic]
///             [TASK chase_player]
///       [TASK goto_last_player_pos]
///   [TASK move_rnd]
///   [TASK idle]
/// ```
fn smart(config: &GameConfig) -> Node<AiContext> {
    let mut children = vec![in_aggro_range(config, hunt())];
    children.extend(wander_or_idle());
    selector(children)
}

/// Remember, then attack or chase; when out of sight go to the last sighting.
fn hunt() -> Node<AiContext> {
    let engage = sequence(vec![
        task(RememberTarget),
        selector(vec![
            adjacent(task(AttackBasic::new())),
            task(ChaseTarget::new()),
        ]),
    ]);
    selector(vec![visible(engage), task(GotoRemembered::last_target())])
}

/// ```text
/// [SEL]
///   [COND player_in_range]
///     [COND player_visible]
///       [SEL]
///         [COND player_in_range 1]
///           [SEL]
///             [COND hp_low]
///               [TASK drink_potion HP]
///             [TASK attack_basic]
///         [COND hp_low]
///           [SEL]
///             [TASK drink_potion HP]
///             [TASK move_away]
///         [TASK move_away]
///   [COND hp_low]
///     [TASK drink_potion HP]
///   [TASK move_rnd]
///   [TASK idle]
/// ```
fn coward(config: &GameConfig) -> Node<AiContext> {
    let drink = || task(DrinkPotion::new(PotionPreference::Hp));

    let cornered = selector(vec![hurt(config, drink()), task(AttackBasic::new())]);
    let react = selector(vec![
        adjacent(cornered),
        hurt(config, selector(vec![drink(), task(MoveAway)])),
        task(MoveAway),
    ]);

    let mut children = vec![
        in_aggro_range(config, visible(react)),
        hurt(config, drink()),
    ];
    children.extend(wander_or_idle());
    selector(children)
}

/// ```text
/// [SEL]
///   [COND player_in_range]
///     <hunt>
///   [COND d100 50]
///     [TASK mine_tunnel]
///   [TASK goto_last_mined_pos]
///   [TASK pick_items]
///   [TASK move_rnd]
///   [TASK idle]
/// ```
fn miner(config: &GameConfig) -> Node<AiContext> {
    let mut children = vec![
        in_aggro_range(config, hunt()),
        condition(chance(MINER_DIG_CHANCE), Some(task(MineTunnel))),
        task(GotoRemembered::last_mined()),
        task(PickItems::any()),
    ];
    children.extend(wander_or_idle());
    selector(children)
}

/// ```text
/// [SEL]
///   [COND player_in_range 1]
///     [TASK attack_basic]
///   [COND player_in_range]
///     [COND player_visible]
///       [TASK chase_player]
///   [SEQ]
///     [REPEAT 3]
///       [TASK save_player_pos]
///     [TASK goto_last_player_pos]
///     [FAIL]
/// ```
///
/// The Repeater holds the guard in place for [`GUARD_WATCH_TURNS`] turns
/// while it keeps noting the player's position. On the following turn it
/// takes one step toward that position and the trailing Failure resets the
/// tree, restarting the watch.
fn guard(config: &GameConfig) -> Node<AiContext> {
    let watch = sequence(vec![
        repeat(GUARD_WATCH_TURNS, task(RememberTarget)),
        task(GotoRemembered::last_target()),
        failure(),
    ]);

    selector(vec![
        adjacent(task(AttackBasic::new())),
        in_aggro_range(config, visible(task(ChaseTarget::new()))),
        watch,
    ])
}
