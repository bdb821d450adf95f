#![cfg(feature = "bt")]

use ai_bt::{BehaviorTree, BtNode, BtStatus, ExecuteAction, Selector};
use ai_core::TickContext;
use ai_utility::{Consideration, FnAction, Reasoner, UtilityNode};

#[derive(Default)]
struct Guard {
    alarm: bool,
    log: Vec<&'static str>,
}

fn guard_tree() -> BehaviorTree<Guard> {
    let reasoner = Reasoner::first_score().with_consideration(
        Consideration::sum_of_children()
            .with_name("raise")
            .with_appraisal(ai_utility::FnAppraisal::new(|g: &Guard| {
                if g.alarm {
                    5.0
                } else {
                    0.0
                }
            }))
            .with_action(FnAction::new(|g: &mut Guard| g.log.push("raise"))),
    );
    let children: Vec<Box<dyn BtNode<Guard>>> = vec![
        Box::new(UtilityNode::new(reasoner)),
        Box::new(ExecuteAction::new(|_time, g: &mut Guard| {
            g.log.push("patrol");
            BtStatus::Success
        })),
    ];
    BehaviorTree::new(Selector::new(children), Guard::default())
}

#[test]
fn utility_node_fails_when_no_action_is_chosen() {
    let mut tree = guard_tree();
    let time = TickContext::new(0, 0.1, 0.1);

    assert_eq!(tree.tick(&time), Ok(BtStatus::Success));
    assert_eq!(tree.context().log, vec!["patrol"]);

    tree.context_mut().alarm = true;
    assert_eq!(tree.tick(&time), Ok(BtStatus::Success));
    assert_eq!(tree.context().log, vec!["patrol", "raise"]);
}

#[test]
fn utility_node_is_tagged_in_catalog() {
    let catalog = ai_utility::catalog();
    assert!(catalog.get("UtilityNode").is_some());
}
