//! Name-based leaf construction.
//!
//! Monster scripts refer to leaves by name with string parameters, e.g.
//! `[COND p1="player_in_range" p2="1"]` or `[TASK p1="drink_potion" p2="HP"]`.
//! A script compiler resolves those through [`task`] and [`condition`]; this
//! module is the whole contract between the two.

use std::str::FromStr;

use behavior_tree::Node;
use behavior_tree::builder::{self, condition as gate};
use game_core::{GameConfig, ItemKind};

use crate::ai::AiContext;
use crate::ai::conditions;
use crate::ai::tasks::{
    AttackBasic, ChaseTarget, DrinkPotion, GotoRemembered, Idle, MineBlock, MineTunnel, MoveAway,
    PickItems, PotionPreference, RandomMove, RememberTarget,
};
use crate::error::{Result, RuntimeError};

/// Builds a leaf task from its script name.
///
/// | Name | Parameters |
/// |---|---|
/// | `idle`, `move_rnd`, `move_away`, `chase_player` | none |
/// | `attack_basic` (alias `attack`) | none |
/// | `save_player_pos`, `goto_last_player_pos`, `goto_last_mined_pos` | none |
/// | `drink_potion` | `HP`, `MP` or `ANY` (default `ANY`) |
/// | `pick_items` | item kinds to accept, empty for anything |
/// | `mine_block`, `mine_tunnel` | none |
pub fn task(name: &str, params: &[&str]) -> Result<Node<AiContext>> {
    let node = match name {
        "idle" => builder::task(Idle),
        "move_rnd" => builder::task(RandomMove),
        "move_away" => builder::task(MoveAway),
        "chase_player" => builder::task(ChaseTarget::new()),
        "attack" | "attack_basic" => builder::task(AttackBasic::new()),
        "save_player_pos" => builder::task(RememberTarget),
        "goto_last_player_pos" => builder::task(GotoRemembered::last_target()),
        "goto_last_mined_pos" => builder::task(GotoRemembered::last_mined()),
        "drink_potion" => {
            let preference = match params.first() {
                Some(raw) => parse(name, raw)?,
                None => PotionPreference::Any,
            };
            builder::task(DrinkPotion::new(preference))
        }
        "pick_items" => {
            let filter = params
                .iter()
                .map(|raw| item_kind(name, raw))
                .collect::<Result<Vec<_>>>()?;
            builder::task(PickItems::only(filter))
        }
        "mine_block" => builder::task(MineBlock),
        "mine_tunnel" => builder::task(MineTunnel),
        unknown => return Err(RuntimeError::UnknownTask(unknown.to_string())),
    };

    tracing::trace!(task = name, ?params, "built task");
    Ok(node)
}

/// Builds a Condition node from its script name, gating `child`.
///
/// | Name | Parameters |
/// |---|---|
/// | `player_in_range` | range (default `config.aggro_range`) |
/// | `player_visible` | none |
/// | `hp_low` | percent (default `config.hp_low_percent`) |
/// | `d100` | chance in percent, required |
/// | `remembers` | Blackboard key, required |
pub fn condition(
    name: &str,
    params: &[&str],
    child: Option<Node<AiContext>>,
    config: &GameConfig,
) -> Result<Node<AiContext>> {
    let predicate = match name {
        "player_in_range" => {
            let range = optional(name, params, config.aggro_range)?;
            conditions::player_in_range(range)
        }
        "player_visible" => conditions::player_visible(),
        "hp_low" => {
            let percent = optional(name, params, config.hp_low_percent)?;
            conditions::hp_low(percent)
        }
        "d100" => conditions::chance(required(name, params)?),
        "remembers" => conditions::remembers(required(name, params)?),
        unknown => return Err(RuntimeError::UnknownCondition(unknown.to_string())),
    };

    Ok(gate(predicate, child))
}

fn parse<T: FromStr>(leaf: &str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| RuntimeError::InvalidParameter {
        leaf: leaf.to_string(),
        value: raw.to_string(),
    })
}

fn optional<T: FromStr>(leaf: &str, params: &[&str], default: T) -> Result<T> {
    params.first().map_or(Ok(default), |raw| parse(leaf, raw))
}

fn required<T: FromStr>(leaf: &str, params: &[&str]) -> Result<T> {
    let raw = params.first().ok_or_else(|| RuntimeError::InvalidParameter {
        leaf: leaf.to_string(),
        value: String::new(),
    })?;
    parse(leaf, raw)
}

fn item_kind(leaf: &str, raw: &str) -> Result<ItemKind> {
    let kind = match raw.to_ascii_lowercase().as_str() {
        "healing_potion" => ItemKind::HealingPotion,
        "mana_potion" => ItemKind::ManaPotion,
        "unknown_potion" => ItemKind::UnknownPotion,
        "gem" => ItemKind::Gem,
        "coins" => ItemKind::Coins,
        "junk" => ItemKind::Junk,
        _ => {
            return Err(RuntimeError::InvalidParameter {
                leaf: leaf.to_string(),
                value: raw.to_string(),
            });
        }
    };
    Ok(kind)
}
