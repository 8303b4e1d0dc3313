#![allow(dead_code)]

use blackwood_engine::command::parse_command;
use blackwood_engine::repl::{ReplControl, dispatch_command};
use blackwood_engine::{BlackwoodWorld, View, ViewItem};

/// Feed each line to the command dispatcher, collecting everything pushed to the view.
pub fn play(world: &mut BlackwoodWorld, lines: &[&str]) -> View {
    let mut view = View::new();
    for line in lines {
        let control = dispatch_command(world, &mut view, &parse_command(line)).expect("command resolves");
        if control == ReplControl::Quit {
            break;
        }
    }
    view
}

pub fn failures(view: &View) -> Vec<String> {
    view.view_items()
        .filter_map(|item| match item {
            ViewItem::ActionFailure(msg) => Some(msg.clone()),
            _ => None,
        })
        .collect()
}

pub fn successes(view: &View) -> Vec<String> {
    view.view_items()
        .filter_map(|item| match item {
            ViewItem::ActionSuccess(msg) => Some(msg.clone()),
            _ => None,
        })
        .collect()
}
