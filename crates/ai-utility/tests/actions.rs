use ai_core::AiError;
use ai_utility::{
    ActionWithOptions, CompositeAction, Consideration, FnAction, Reasoner, ReasonerAction,
    UtilityAction,
};

#[derive(Default)]
struct Log {
    entries: Vec<char>,
    aggressive: bool,
}

fn push(c: char) -> FnAction<Log> {
    FnAction::new(move |log: &mut Log| log.entries.push(c))
}

#[test]
fn action_with_options_keeps_first_best_option() {
    let action = ActionWithOptions::new(|log: &mut Log, option: &char| log.entries.push(*option))
        .with_options(vec!['a', 'b', 'c'])
        .with_appraisal(|_: &Log, option: &char| if *option == 'a' { 2.0 } else { 5.0 });

    let mut log = Log::default();
    assert_eq!(action.best_option(&log), Some(&'b'));

    let mut action = action;
    action.execute(&mut log).unwrap();
    assert_eq!(log.entries, vec!['b']);
}

#[test]
fn action_with_options_sums_appraisals() {
    let action = ActionWithOptions::new(|_: &mut Log, _: &u32| {})
        .with_options(vec![1, 2, 3])
        .with_appraisal(|_: &Log, n: &u32| *n as f32)
        .with_appraisal(|_: &Log, n: &u32| if *n == 1 { 10.0 } else { 0.0 });

    let log = Log::default();
    assert_eq!(action.score_option(&log, &1), 11.0);
    assert_eq!(action.best_option(&log), Some(&1));
}

#[test]
fn action_with_options_without_options_does_nothing() {
    let mut action = ActionWithOptions::new(|log: &mut Log, option: &char| log.entries.push(*option));
    let mut log = Log::default();

    assert_eq!(action.best_option(&log), None);
    action.execute(&mut log).unwrap();
    assert!(log.entries.is_empty());

    action.set_options(vec!['z']);
    assert_eq!(action.options(), &['z']);
    action.execute(&mut log).unwrap();
    assert_eq!(log.entries, vec!['z']);
}

#[test]
fn composite_runs_children_in_order() {
    let mut composite = CompositeAction::new()
        .with_action(push('1'))
        .with_action(push('2'))
        .with_action(push('3'));
    assert_eq!(composite.len(), 3);

    let mut log = Log::default();
    composite.execute(&mut log).unwrap();
    composite.execute(&mut log).unwrap();
    assert_eq!(log.entries, vec!['1', '2', '3', '1', '2', '3']);
}

#[test]
fn composite_stops_on_error() {
    let mut composite = CompositeAction::new()
        .with_action(push('1'))
        .with_action(FnAction::<Log>::empty())
        .with_action(push('3'));

    let mut log = Log::default();
    assert!(matches!(
        composite.execute(&mut log),
        Err(AiError::Precondition(_))
    ));
    assert_eq!(log.entries, vec!['1']);
}

#[test]
fn fn_action_without_closure_is_a_precondition_failure() {
    let mut action = FnAction::<Log>::empty();
    let mut log = Log::default();
    assert!(matches!(action.execute(&mut log), Err(AiError::Precondition(_))));

    action.set_action(|log: &mut Log| log.entries.push('x'));
    assert_eq!(action.execute(&mut log), Ok(()));
    assert_eq!(log.entries, vec!['x']);
}

#[test]
fn reasoner_action_runs_nested_choice() {
    let nested = Reasoner::first_score()
        .with_consideration(
            Consideration::fixed(0.0)
                .with_name("flee")
                .with_action(push('f')),
        )
        .with_consideration(
            Consideration::fixed(2.0)
                .with_name("attack")
                .with_action(push('a')),
        );
    let mut action = ReasonerAction::new(nested);
    assert_eq!(action.reasoner().considerations().len(), 2);

    let mut log = Log::default();
    action.execute(&mut log).unwrap();
    assert_eq!(log.entries, vec!['a']);
}

#[test]
fn reasoner_action_without_chosen_action_is_a_no_op() {
    let nested = Reasoner::<Log>::highest_score();
    let mut action = ReasonerAction::new(nested);

    let mut log = Log {
        aggressive: true,
        ..Log::default()
    };
    assert_eq!(action.execute(&mut log), Ok(()));
    assert!(log.entries.is_empty());
    assert!(log.aggressive);
}
