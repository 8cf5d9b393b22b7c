//! Tests for flight planning
//!
//! Checks the guarantees a renderer relies on across a range of valid patterns.

use std::collections::HashSet;

use siteswap_core::pattern::validate;
use siteswap_core::plan::{Hand, plan};
use siteswap_core::{DEFAULT_REPETITIONS, Error, ThrowPattern};

const VALID_PATTERNS: &[&str] = &[
    "1", "20", "3", "40", "51", "441", "423", "501", "531", "600", "633", "744", "7441", "52512",
    "55550", "97531", "b1", "db97531",
];

fn pattern(text: &str) -> ThrowPattern {
    validate(text).unwrap_or_else(|e| panic!("{} should be valid: {}", text, e))
}

// =============================================================================
// Scenario tests
// =============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn cascade_two_beats() {
        let p = pattern("3");
        let schedule = plan(&p, 3, 2).unwrap();

        assert_eq!(schedule.total_beats(), 2);
        assert_eq!(schedule.len(), 2);

        let first = schedule.flights()[0];
        assert_eq!((first.ball_id, first.start_beat, first.end_beat), (0, 0, 3));
        assert_eq!((first.from_hand, first.to_hand), (Hand::Left, Hand::Right));

        let second = schedule.flights()[1];
        assert_eq!((second.ball_id, second.start_beat, second.end_beat), (1, 1, 4));
        assert_eq!((second.from_hand, second.to_hand), (Hand::Right, Hand::Left));
    }

    #[test]
    fn zero_repetitions_still_cover_one_period() {
        let p = pattern("531");
        let schedule = plan(&p, 3, 0).unwrap();
        assert_eq!(schedule.total_beats(), 3);
        assert_eq!(schedule.len(), 3);
    }

    #[test]
    fn default_repetitions() {
        let p = pattern("531");
        let schedule = plan(&p, p.ball_count(), DEFAULT_REPETITIONS).unwrap();
        assert_eq!(schedule.total_beats(), 18);
        assert_eq!(schedule.repetitions(), 6);
    }

    #[test]
    fn shower_531_identities() {
        let p = pattern("531");
        let schedule = plan(&p, 3, 2).unwrap();
        let ids: Vec<usize> = schedule.flights().iter().map(|f| f.ball_id).collect();
        // the 1 thrown on beat 2 comes straight back for beat 3
        assert_eq!(ids, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn even_heights_stay_in_hand() {
        let p = pattern("40");
        let schedule = plan(&p, 2, 3).unwrap();
        assert!(schedule.flights().iter().all(|f| !f.crosses()));
        assert!(schedule.flights().iter().all(|f| f.from_hand == Hand::Left));
        assert_eq!(schedule.throws_from(Hand::Right).count(), 0);
    }

    #[test]
    fn airborne_query() {
        let p = pattern("3");
        let schedule = plan(&p, 3, 6).unwrap();
        let in_air: Vec<usize> = schedule.airborne_at(4).map(|f| f.ball_id).collect();
        assert_eq!(in_air, vec![2, 0, 1]);
        assert_eq!(schedule.flights_for_ball(1).count(), 2);
    }

    #[test]
    fn too_few_balls_fails_explicitly() {
        let p = pattern("531");
        let err = plan(&p, 2, 2).unwrap_err();
        assert!(matches!(err, Error::IdentityExhausted { beat: 2 }));
        assert!(!err.is_user_error());
    }

    #[test]
    fn throw_from_empty_hand_fails_explicitly() {
        let p = pattern("3100");
        for reps in [1, 2, 6] {
            let err = plan(&p, p.ball_count(), reps).unwrap_err();
            assert!(matches!(err, Error::IdentityExhausted { beat: 1 }), "x{}", reps);
            assert!(!err.is_user_error());
        }
    }
}

// =============================================================================
// Property tests over valid patterns
// =============================================================================

mod properties {
    use super::*;

    #[test]
    fn plans_satisfy_contract() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            for reps in [0, 1, 2, 6, 12] {
                let schedule = plan(&p, p.ball_count(), reps).unwrap();
                assert_eq!(schedule.check_contract(&p), Ok(()), "{} x{}", text, reps);
            }
        }
    }

    #[test]
    fn start_beats_match_nonzero_throws() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            let schedule = plan(&p, p.ball_count(), 6).unwrap();

            let expected: Vec<usize> = (0..schedule.total_beats())
                .filter(|&b| p.height_at(b) > 0)
                .collect();
            let actual: Vec<usize> = schedule.flights().iter().map(|f| f.start_beat).collect();
            assert_eq!(actual, expected, "{}", text);
        }
    }

    #[test]
    fn flight_fields_are_consistent() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            let schedule = plan(&p, p.ball_count(), 6).unwrap();
            for f in schedule.flights() {
                assert!(f.ball_id < p.ball_count(), "{}", text);
                assert_eq!(f.end_beat - f.start_beat, f.throw_height as usize);
                assert_eq!(f.from_hand, Hand::at_beat(f.start_beat));
                assert_eq!(f.to_hand, Hand::at_beat(f.end_beat));
                assert_eq!(f.crosses(), f.throw_height % 2 == 1);
            }
        }
    }

    #[test]
    fn balls_are_rethrown_where_they_land() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            let schedule = plan(&p, p.ball_count(), 6).unwrap();
            for ball in 0..p.ball_count() {
                let flights: Vec<_> = schedule.flights_for_ball(ball).collect();
                for pair in flights.windows(2) {
                    assert_eq!(pair[0].end_beat, pair[1].start_beat, "{} ball {}", text, ball);
                }
            }
        }
    }

    #[test]
    fn every_ball_is_used_in_long_plans() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            let schedule = plan(&p, p.ball_count(), 36).unwrap();
            let used: HashSet<usize> = schedule.flights().iter().map(|f| f.ball_id).collect();
            assert_eq!(used.len(), p.ball_count(), "{}", text);
        }
    }

    #[test]
    fn planning_is_deterministic() {
        for text in VALID_PATTERNS {
            let p = pattern(text);
            let a = plan(&p, p.ball_count(), 4).unwrap();
            let b = plan(&p, p.ball_count(), 4).unwrap();
            assert_eq!(a, b, "{}", text);
        }
    }
}
