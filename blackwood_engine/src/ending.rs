//! Ending classification.
//!
//! Once the main loop stops, the final health, escape flag and kill count decide
//! which of the endings the player earned.

use std::fmt;

use crate::loader::rules::Rules;
use crate::world::BlackwoodWorld;
use crate::{View, ViewItem};

use log::info;

/// Narrative outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// Health ran out.
    Loss,
    /// Got out without defeating anything.
    Escape,
    /// Got out after defeating at least `Rules::good_kills` enemies.
    Good,
    /// Got out after defeating at least `Rules::perfect_kills` enemies.
    Perfect,
    /// Still alive and still inside. The main loop never ends this way.
    Stranded,
}

impl Ending {
    /// Decide the ending from terminal session state.
    pub fn classify(health: i32, has_escaped: bool, monsters_defeated: u32, rules: &Rules) -> Ending {
        if health <= 0 {
            Ending::Loss
        } else if !has_escaped {
            Ending::Stranded
        } else if monsters_defeated >= rules.perfect_kills {
            Ending::Perfect
        } else if monsters_defeated >= rules.good_kills {
            Ending::Good
        } else {
            Ending::Escape
        }
    }

    /// Decide the ending for a world whose loop has finished.
    pub fn for_world(world: &BlackwoodWorld) -> Ending {
        Ending::classify(
            world.player.health(),
            world.session.has_escaped,
            world.session.monsters_defeated,
            &world.rules,
        )
    }

    pub fn headline(self) -> &'static str {
        match self {
            Ending::Loss => "GAME OVER",
            Ending::Escape => "ESCAPE ENDING",
            Ending::Good => "GOOD ENDING",
            Ending::Perfect => "PERFECT ENDING",
            Ending::Stranded => "NO WAY OUT",
        }
    }

    pub fn narration(self) -> &'static str {
        match self {
            Ending::Loss => "The darkness consumes you... Your body is never found.",
            Ending::Escape => {
                "You fled the mansion in terror! You survived... barely. But the evil still lurks within those walls."
            },
            Ending::Good => {
                "You escaped Blackwood Mansion alive! The nightmares will haunt you forever, but at least you survived."
            },
            Ending::Perfect => {
                "You escaped the mansion AND defeated all the horrors within! The curse is broken! You are a TRUE SURVIVOR!"
            },
            Ending::Stranded => "Dawn never comes. The mansion keeps you.",
        }
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline())
    }
}

/// Classify the finished game and push the ending summary to the view.
pub fn show_ending(world: &BlackwoodWorld, view: &mut View) -> Ending {
    let ending = Ending::for_world(world);
    info!(
        "game over: {ending} (health {}, escaped: {}, monsters defeated: {})",
        world.player.health(),
        world.session.has_escaped,
        world.session.monsters_defeated
    );
    view.push(ViewItem::EndingSummary {
        ending,
        monsters_defeated: world.session.monsters_defeated,
        health: (ending != Ending::Loss).then(|| world.player.health()),
        max_health: world.player.max_health(),
    });
    ending
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(health: i32, escaped: bool, kills: u32) -> Ending {
        Ending::classify(health, escaped, kills, &Rules::default())
    }

    #[test]
    fn death_overrides_everything() {
        assert_eq!(classify(0, true, 3), Ending::Loss);
        assert_eq!(classify(-12, false, 0), Ending::Loss);
    }

    #[test]
    fn escape_tiers_follow_kill_count() {
        assert_eq!(classify(100, true, 0), Ending::Escape);
        assert_eq!(classify(40, true, 1), Ending::Good);
        assert_eq!(classify(40, true, 2), Ending::Good);
        assert_eq!(classify(1, true, 3), Ending::Perfect);
        assert_eq!(classify(1, true, 7), Ending::Perfect);
    }

    #[test]
    fn alive_inside_is_stranded() {
        assert_eq!(classify(50, false, 2), Ending::Stranded);
    }

    #[test]
    fn loss_summary_omits_final_health() {
        let mut world = BlackwoodWorld::new_empty();
        world.player.take_damage(150);
        world.session.monsters_defeated = 1;
        let mut view = View::new();
        assert_eq!(show_ending(&world, &mut view), Ending::Loss);
        assert!(matches!(
            view.items[0].view_item,
            ViewItem::EndingSummary {
                ending: Ending::Loss,
                monsters_defeated: 1,
                health: None,
                ..
            }
        ));
    }
}
