pub mod test_offer_and_answer_reach_the_addressed_peer;
pub mod test_relay_to_absent_participant_is_silently_dropped;
