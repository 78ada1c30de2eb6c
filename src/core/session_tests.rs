#[cfg(test)]
mod tests {
    use crate::core::{
        models::Card,
        session::{
            ReviewSession,
            SessionEvent,
            SessionState,
        },
        stats::StatsLog,
    };

    #[test]
    fn initial_state_is_first_card_face_down() {
        let session = ReviewSession::new();
        assert_eq!(session.state(), SessionState { current_index: 0, revealed: false });
    }

    #[test]
    fn next_cycles_back_to_start_after_deck_len_steps() {
        for deck_len in 1..=7 {
            let mut session = ReviewSession::new();
            for step in 1..deck_len {
                session.next(deck_len);
                assert_eq!(session.state().current_index, step);
            }
            session.next(deck_len);
            assert_eq!(session.state().current_index, 0, "deck of {}", deck_len);
        }
    }

    #[test]
    fn prev_wraps_to_last_card() {
        let mut session = ReviewSession::new();
        session.prev(4);
        assert_eq!(session.state().current_index, 3);
        session.prev(4);
        assert_eq!(session.state().current_index, 2);
    }

    #[test]
    fn flip_toggles_reveal_without_moving() {
        let mut session = ReviewSession::new();
        session.next(5);

        session.flip();
        assert_eq!(session.state(), SessionState { current_index: 1, revealed: true });
        session.flip();
        assert_eq!(session.state(), SessionState { current_index: 1, revealed: false });
    }

    #[test]
    fn advancing_hides_the_answer_again() {
        let mut session = ReviewSession::new();
        session.flip();
        session.next(3);
        assert!(!session.revealed());

        session.flip();
        session.prev(3);
        assert!(!session.revealed());
    }

    #[test]
    fn single_card_deck_always_shows_index_zero() {
        // A one-card deck: Next is a no-op on the index, Flip still works.
        let mut session = ReviewSession::new();

        for _ in 0..3 {
            session.next(1);
            assert_eq!(session.state().current_index, 0);
        }

        session.flip();
        assert!(session.revealed());
        assert_eq!(session.state().current_index, 0);
    }

    #[test]
    fn empty_deck_has_no_current_card_and_never_panics() {
        let mut session = ReviewSession::new();
        let cards: Vec<Card> = Vec::new();

        session.next(0);
        session.prev(0);
        assert_eq!(session.state().current_index, 0);
        assert!(session.current_card(&cards).is_none());
    }

    #[test]
    fn current_card_clamps_a_stale_index_by_modulo() {
        let mut session = ReviewSession::new();
        for _ in 0..5 {
            session.next(6);
        }
        assert_eq!(session.state().current_index, 5);

        // Deck shrank underneath the session; index 5 resolves via modulo.
        let cards = vec![Card::new("a", "1"), Card::new("b", "2")];
        assert_eq!(session.current_card(&cards), Some(&cards[1]));
    }

    #[test]
    fn answer_records_outcome_then_advances() {
        let mut session = ReviewSession::new();
        let mut stats = StatsLog::new();

        session.answer(true, 3, &mut stats);
        session.answer(false, 3, &mut stats);

        let agg = stats.aggregate();
        assert_eq!(agg.total, 2);
        assert_eq!(agg.correct, 1);
        assert_eq!(session.state().current_index, 2);
        assert!(!session.revealed());
    }

    #[test]
    fn transitions_are_pure() {
        let state = SessionState { current_index: 2, revealed: true };

        let after = state.apply(SessionEvent::Next, 4);
        assert_eq!(after, SessionState { current_index: 3, revealed: false });
        // The original value is untouched.
        assert_eq!(state, SessionState { current_index: 2, revealed: true });
    }
}
