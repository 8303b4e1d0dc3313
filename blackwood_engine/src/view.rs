//! View module.
//! This contains the view to the game world / messages.
//! Rather than printing to the console from each handler, we'll aggregate needed information and messages
//! to be organized and displayed at the end of the turn.

use colored::Colorize;
use textwrap::{fill, termwidth};
use variantly::Variantly;

use crate::ending::Ending;
use crate::loader::help::HelpCommand;
use crate::style::{GameStyle, indented_block, normal_block};

const ICON_SUCCESS: &str = "\u{2611}"; // ✔
const ICON_FAILURE: &str = "\u{274C}"; // ✖
const ICON_ERROR: &str = "⚠︎"; // U+26A0 U+FE0E
const ICON_WARNING: &str = "⚠";
const ICON_COMBAT: &str = "⚔";
const ICON_ENGINE: &str = "⚙";
const ICON_HARMED: &str = "\u{2623}"; // biohazard sign
const ICON_HEALED: &str = "\u{2624}"; // caduceus
const ICON_DEATH: &str = "☠";

/// View aggregates information to be displayed on each pass through the REPL and then organizes
/// and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            priority: item.default_priority(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// All buffered items, in push order.
    pub fn view_items(&self) -> impl Iterator<Item = &ViewItem> {
        self.items.iter().map(|entry| &entry.view_item)
    }

    /// Compose and display all message contents in the current frame / turn.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        let has = |section: Section| self.items.iter().any(|entry| entry.section == section);
        let (environment, direct, world, system) = (
            has(Section::Environment),
            has(Section::DirectResult),
            has(Section::WorldResponse),
            has(Section::System),
        );

        if environment {
            println!("{:.>width$}\n", "scene".section_style(), width = self.width);
            self.environment();
        }
        if direct {
            println!("{:.>width$}\n", "results".section_style(), width = self.width);
            self.direct_results();
        }
        if world {
            println!("{:.>width$}\n", "responses".section_style(), width = self.width);
            self.world_reaction();
        }
        if system {
            println!("{:.>width$}\n", "game".section_style(), width = self.width);
            self.system();
        }

        // clear the buffer for the next turn
        self.reset();

        // create a little space before the next prompt
        println!();
    }

    // SECTION AGGREGATORS START HERE --------------------

    fn environment(&self) {
        self.room_description();
        self.enemy_warning();
        self.room_item_list();
        self.room_exit_list();
    }

    fn direct_results(&self) {
        // direct inspection results
        self.item_detail();
        self.enemy_detail();
        self.inventory();

        // successes / failures
        self.action_success();
        self.action_failure();
        self.errors();
    }

    /// Display world reactions in priority order (strikes, then harm/heal, then deaths).
    fn world_reaction(&self) {
        for entry in self.world_entries_sorted() {
            match &entry.view_item {
                ViewItem::CombatStrike {
                    weapon,
                    target,
                    damage,
                    remaining,
                } => Self::combat_strike(weapon.as_deref(), target, *damage, *remaining),
                ViewItem::CharacterHarmed {
                    name,
                    cause,
                    amount,
                    health,
                    max_health,
                } => Self::character_harmed(name, cause, *amount, *health, *max_health),
                ViewItem::CharacterHealed {
                    name,
                    cause,
                    amount,
                    health,
                    max_health,
                } => Self::character_healed(name, cause, *amount, *health, *max_health),
                ViewItem::EnemyDefeated(name) => Self::enemy_defeated(name),
                _ => {},
            }
        }
    }

    /// Filter all `ViewEntry`s for this frame, retaining only those in the `WorldResponse` section and sort them
    /// by priority (lowest priority value shows first, e.g. 1 goes before 10, -10 goes before 1).
    fn world_entries_sorted(&self) -> Vec<&ViewEntry> {
        let mut world_entries: Vec<&ViewEntry> = self
            .items
            .iter()
            .filter(|entry| entry.section == Section::WorldResponse)
            .collect();
        world_entries.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.sequence.cmp(&b.sequence)));
        world_entries
    }

    fn system(&self) {
        self.show_help();
        self.engine_message();
        self.ending_summary();
    }

    // INDIVIDUAL VIEW ITEM HANDLERS START HERE -------------------------------

    fn engine_message(&self) {
        let engine_msgs = self.view_items().filter(|i| i.is_engine_message());
        for msg in engine_msgs {
            if let ViewItem::EngineMessage(text) = msg {
                println!("{}", fill(format!("{ICON_ENGINE:<4}{text}").as_str(), normal_block()));
            }
        }
    }

    fn show_help(&self) {
        if let Some(ViewItem::Help { basic_text, commands }) = self.view_items().find(|item| item.is_help()) {
            println!("{}", fill(basic_text, normal_block()).italic().cyan());
            println!();
            println!("{}", "Commands:".bold().yellow());
            println!();
            for command in commands {
                let formatted_line = format!("{} - {}", command.command.bold().green(), command.description.italic());
                println!("{}", fill(&formatted_line, normal_block()));
            }
            println!();
        }
    }

    fn ending_summary(&self) {
        if let Some(ViewItem::EndingSummary {
            ending,
            monsters_defeated,
            health,
            max_health,
        }) = self.view_items().find(|item| item.is_ending_summary())
        {
            let rule = "═".repeat(self.width.min(60));
            println!("{rule}");
            println!("{:^width$}", ending.headline().ending_style(), width = self.width.min(60));
            println!("{rule}");
            println!("{}", fill(ending.narration(), normal_block()).description_style());
            println!();
            println!("{:18} {monsters_defeated}", "Monsters defeated:");
            if let Some(health) = health {
                println!("{:18} {health}/{max_health}", "Final health:");
            }
            println!("{rule}");
            println!("{:^width$}", "Thanks for playing!", width = self.width.min(60));
            println!("{rule}");
        }
    }

    fn inventory(&self) {
        if let Some(ViewItem::Inventory {
            health,
            max_health,
            items,
        }) = self.view_items().find(|i| i.is_inventory())
        {
            println!("{:10} {health}/{max_health}", "Health:".subheading_style());
            println!("{}:", "Inventory".subheading_style());
            if items.is_empty() {
                println!("   {}", "Empty".italic().dimmed());
            } else {
                for line in items {
                    match line.weapon_damage {
                        Some(damage) => println!("   • {} (Weapon - {damage} dmg)", line.item_name.item_style()),
                        None => println!("   • {}", line.item_name.item_style()),
                    }
                }
            }
            println!();
        }
    }

    fn action_success(&self) {
        let messages = self.view_items().filter_map(|i| match i {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        });
        for msg in messages {
            println!(
                "{}",
                fill(format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(), normal_block())
            );
        }
    }

    fn action_failure(&self) {
        let messages = self.view_items().filter_map(|i| match i {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        });
        for msg in messages {
            println!(
                "{}",
                fill(format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(), normal_block())
            );
        }
    }

    fn errors(&self) {
        let messages = self.view_items().filter_map(|i| match i {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        });
        for msg in messages {
            println!(
                "{}",
                fill(format!("{:<4}{}", ICON_ERROR.error_style(), msg).as_str(), normal_block())
            );
        }
    }

    fn combat_strike(weapon: Option<&str>, target: &str, damage: i32, remaining: i32) {
        match weapon {
            Some(weapon) => println!("{:<4}You attack with your {}!", ICON_COMBAT.bold(), weapon.item_style()),
            None => println!("{:<4}You swing your fists desperately!", ICON_COMBAT.bold()),
        }
        println!("    You deal {} damage to the {}!", damage.to_string().bright_red(), target.enemy_style());
        if remaining > 0 {
            println!("    {} has {remaining} HP remaining!", target.enemy_style());
        }
        println!();
    }

    fn character_harmed(name: &str, cause: &str, amount: i32, health: i32, max_health: i32) {
        println!(
            "{}",
            fill(
                format!(
                    "{:<4}{} hurt by the {}! (-{} hp, {}/{} remaining)",
                    ICON_HARMED.bright_yellow(),
                    name,
                    cause.enemy_style(),
                    amount.to_string().bright_red(),
                    health,
                    max_health
                )
                .as_str(),
                normal_block()
            )
        );
        println!();
    }

    fn character_healed(name: &str, cause: &str, amount: i32, health: i32, max_health: i32) {
        println!(
            "{}",
            fill(
                format!(
                    "{:<4}{} healed by the {}! (+{} hp, {}/{})",
                    ICON_HEALED.bright_blue(),
                    name,
                    cause.item_style(),
                    amount.to_string().bright_green(),
                    health,
                    max_health
                )
                .as_str(),
                normal_block()
            )
        );
        println!();
    }

    fn enemy_defeated(name: &str) {
        println!("{:<4}You defeated the {}!", ICON_DEATH.red(), name.enemy_style());
        println!();
    }

    fn enemy_detail(&self) {
        if let Some(ViewItem::EnemyDescription {
            name,
            description,
            health,
            alive,
        }) = self.view_items().find(|i| i.is_enemy_description())
        {
            println!("{}", name.enemy_style().underline());
            println!("{}", fill(description, indented_block()).description_style());
            if *alive {
                println!("    Health: {health}");
            } else {
                println!("    {}", "It lies motionless.".italic().dimmed());
            }
            println!();
        }
    }

    fn item_detail(&self) {
        if let Some(ViewItem::ItemDescription {
            name,
            description,
            damage,
        }) = self.view_items().find(|i| i.is_item_description())
        {
            println!("{}", name.item_style().underline());
            println!("{}", fill(description, indented_block()).description_style());
            if let Some(damage) = damage {
                println!("    Damage: {damage}");
            }
            println!();
        }
    }

    fn enemy_warning(&self) {
        if let Some(ViewItem::EnemyWarning(text)) = self.view_items().find(|i| i.is_enemy_warning()) {
            println!(
                "{}\n",
                fill(format!("{ICON_WARNING:<4}WARNING: {text}").as_str(), normal_block()).warning_style()
            );
        }
    }

    fn room_exit_list(&self) {
        if let Some(ViewItem::RoomExits(exit_lines)) = self.view_items().find(|i| i.is_room_exits()) {
            println!("{}:", "Exits".subheading_style());
            for exit in exit_lines {
                print!("    > ");
                match (&exit.destination, exit.visited, exit.locked) {
                    (None, _, _) => println!("{}", exit.direction.escape_style()),
                    (Some(dest), true, false) => {
                        println!("{} (to {})", exit.direction.exit_visited_style(), dest.room_style());
                    },
                    (Some(dest), true, true) => {
                        println!("{} (to {})", exit.direction.exit_locked_style(), dest.room_style());
                    },
                    (Some(_), false, true) => println!("{}", exit.direction.exit_locked_style()),
                    (Some(_), false, false) => println!("{}", exit.direction.exit_unvisited_style()),
                }
            }
            println!();
        }
    }

    fn room_item_list(&self) {
        if let Some(ViewItem::RoomItems(lines)) = self.view_items().find(|i| i.is_room_items()) {
            println!("{}:", "You see".subheading_style());
            for line in lines {
                println!("    • {} - {}", line.name.item_style(), line.description);
            }
            println!();
        }
    }

    /// Used by `flush()` to show base room description
    fn room_description(&self) {
        if let Some(ViewItem::RoomDescription { name, description }) =
            self.view_items().find(|i| i.is_room_description())
        {
            println!("{:^width$}", name.room_titlebar_style(), width = self.width);
            println!("{}", fill(description, normal_block()).description_style());
            println!();
        }
    }

    /// Clears the View's buffer.
    pub fn reset(&mut self) {
        self.items.clear();
    }
}

/// Subsections of the output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    /// Room description, enemy warning, items and exits.
    Environment,
    /// Direct results of the player's command.
    DirectResult,
    /// Follow-up reactions: blows struck, damage taken, healing, deaths.
    WorldResponse,
    /// Meta/game-system feedback (help, quit, ending).
    System,
}

/// Wrapper for a `ViewItem` to allow flexible ordering of display items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub section: Section,
    pub priority: isize,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    CharacterHarmed {
        name: String,
        cause: String,
        amount: i32,
        health: i32,
        max_health: i32,
    },
    CharacterHealed {
        name: String,
        cause: String,
        amount: i32,
        health: i32,
        max_health: i32,
    },
    CombatStrike {
        weapon: Option<String>,
        target: String,
        damage: i32,
        remaining: i32,
    },
    EndingSummary {
        ending: Ending,
        monsters_defeated: u32,
        health: Option<i32>,
        max_health: i32,
    },
    EnemyDefeated(String),
    EnemyDescription {
        name: String,
        description: String,
        health: i32,
        alive: bool,
    },
    EnemyWarning(String),
    EngineMessage(String),
    Error(String),
    Help {
        basic_text: String,
        commands: Vec<HelpCommand>,
    },
    Inventory {
        health: i32,
        max_health: i32,
        items: Vec<ContentLine>,
    },
    ItemDescription {
        name: String,
        description: String,
        damage: Option<i32>,
    },
    RoomDescription {
        name: String,
        description: String,
    },
    RoomExits(Vec<ExitLine>),
    RoomItems(Vec<ItemLine>),
}

impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::RoomDescription { .. }
            | ViewItem::EnemyWarning(_)
            | ViewItem::RoomItems(_)
            | ViewItem::RoomExits(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::ItemDescription { .. }
            | ViewItem::EnemyDescription { .. }
            | ViewItem::Inventory { .. } => Section::DirectResult,
            ViewItem::CombatStrike { .. }
            | ViewItem::CharacterHarmed { .. }
            | ViewItem::CharacterHealed { .. }
            | ViewItem::EnemyDefeated(_) => Section::WorldResponse,
            ViewItem::EngineMessage(_) | ViewItem::Help { .. } | ViewItem::EndingSummary { .. } => Section::System,
        }
    }

    pub fn default_priority(&self) -> isize {
        match &self {
            ViewItem::CombatStrike { .. } => -30,
            ViewItem::CharacterHarmed { .. } => -20,
            ViewItem::CharacterHealed { .. } => -10,
            ViewItem::EnemyDefeated(_) => 100,
            _ => 0,
        }
    }
}

/// Row data for the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub item_name: String,
    pub weapon_damage: Option<i32>,
}

/// Row data for the room item listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub name: String,
    pub description: String,
}

/// Row data for the exit listing portion of the view.
///
/// `destination` is `None` for the way out of the mansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitLine {
    pub direction: String,
    pub destination: Option<String>,
    pub locked: bool,
    pub visited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_entries_sorted_by_priority_then_push_order() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("ignored".into()));
        view.push(ViewItem::EnemyDefeated("Giant Rat".into()));
        view.push(ViewItem::CharacterHarmed {
            name: "You".into(),
            cause: "Giant Rat".into(),
            amount: 10,
            health: 90,
            max_health: 100,
        });
        view.push(ViewItem::CombatStrike {
            weapon: None,
            target: "Giant Rat".into(),
            damage: 5,
            remaining: 20,
        });

        let ordered: Vec<&str> = view
            .world_entries_sorted()
            .iter()
            .map(|entry| match &entry.view_item {
                ViewItem::CombatStrike { .. } => "strike",
                ViewItem::CharacterHarmed { .. } => "harmed",
                ViewItem::EnemyDefeated(_) => "defeated",
                other => panic!("Unexpected ViewItem in results: {other:?}"),
            })
            .collect();

        assert_eq!(ordered, vec!["strike", "harmed", "defeated"]);
    }

    #[test]
    fn items_are_binned_into_sections() {
        assert_eq!(ViewItem::EnemyWarning("boo".into()).section(), Section::Environment);
        assert_eq!(ViewItem::ActionFailure("no".into()).section(), Section::DirectResult);
        assert_eq!(ViewItem::EnemyDefeated("rat".into()).section(), Section::WorldResponse);
        assert_eq!(ViewItem::EngineMessage("bye".into()).section(), Section::System);
    }

    #[test]
    fn flush_clears_buffer() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("You picked up: flashlight".into()));
        view.flush();
        assert!(view.items.is_empty());
        assert_eq!(view.view_items().count(), 0);
    }
}
