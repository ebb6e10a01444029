pub mod test_other_room_departure_keeps_agent;
