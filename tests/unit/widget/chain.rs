use super::*;

fn finish_current(chain: &mut RowChain) -> ChainStep {
    for _ in 0..10_000 {
        let step = chain.advance_current();
        if let ChainStep::RowFinished { .. } = step {
            return step;
        }
    }
    panic!("row {} never finished", chain.current());
}

#[test]
fn starts_idle_at_row_zero_walking_forward() {
    let chain = RowChain::new();
    assert_eq!(chain.rows().len(), ROWS);
    assert!(chain.rows().iter().all(Progress::is_idle));
    assert_eq!(chain.current(), 0);
    assert_eq!(chain.traversal(), Direction::Forward);
}

#[test]
fn finished_row_moves_pointer_forward() {
    let mut chain = RowChain::new();
    assert!(chain.begin_if_idle());
    let step = finish_current(&mut chain);
    assert_eq!(
        step,
        ChainStep::RowFinished {
            row: 0,
            final_scale: 1.0
        }
    );
    assert_eq!(chain.current(), 1);
    assert_eq!(chain.rows()[0].committed_scale(), 1.0);
    assert!(chain.rows()[1].is_idle());
}

#[test]
fn forward_pass_turns_around_at_the_last_row() {
    let mut chain = RowChain::new();
    for expected in 0..ROWS {
        assert_eq!(chain.current(), expected);
        assert!(chain.begin_if_idle());
        finish_current(&mut chain);
    }
    assert_eq!(chain.current(), ROWS - 1);
    assert_eq!(chain.traversal(), Direction::Backward);

    // Row 4 animates back down, then the pointer steps to row 3.
    assert!(chain.begin_if_idle());
    assert_eq!(chain.rows()[ROWS - 1].direction(), Some(Direction::Backward));
    let step = finish_current(&mut chain);
    assert_eq!(
        step,
        ChainStep::RowFinished {
            row: ROWS - 1,
            final_scale: 0.0
        }
    );
    assert_eq!(chain.current(), ROWS - 2);
}

#[test]
fn backward_pass_turns_around_at_row_zero() {
    let mut chain = RowChain::new();
    for _ in 0..(2 * ROWS) {
        assert!(chain.begin_if_idle());
        finish_current(&mut chain);
        assert!(chain.current() < ROWS);
    }
    assert_eq!(chain.current(), 0);
    assert_eq!(chain.traversal(), Direction::Forward);
    assert!(chain.rows().iter().all(|r| r.committed_scale() == 0.0));
}

#[test]
fn repeated_begin_only_counts_once() {
    let mut chain = RowChain::new();
    assert!(chain.begin_if_idle());
    assert!(!chain.begin_if_idle());
    assert!(!chain.begin_if_idle());
    assert_eq!(chain.rows()[0].direction(), Some(Direction::Forward));
    assert_eq!(chain.rows()[0].scale(), 0.0);
}

#[test]
fn advance_without_begin_changes_nothing() {
    let mut chain = RowChain::new();
    assert_eq!(chain.advance_current(), ChainStep::Continuing);
    assert_eq!(chain, RowChain::new());
}
