pub mod test_duplicate_join_keeps_single_entry;
pub mod test_leave_is_announced_to_remaining_members;
pub mod test_member_sees_presence_in_emission_order;
pub mod test_membership_matches_joined_minus_left;
pub mod test_rejected_room_switch_keeps_membership;
