/// FACEIT level emoji tokens, one per skill tier 1-10.
///
/// Levels outside 1-10 have no badge; callers render the player line
/// without one rather than failing.
pub fn skill_badge(level: i64) -> Option<&'static str> {
    match level {
        1 => Some("<:faceit1:1259604557453987942>"),
        2 => Some("<:faceit2:1259604558737571923>"),
        3 => Some("<:faceit3:1259604560029286560>"),
        4 => Some("<:faceit4:1259604561367404544>"),
        5 => Some("<:faceit5:1259604562805915697>"),
        6 => Some("<:faceit6:1259604563871137904>"),
        7 => Some("<:faceit7:1259604565544800357>"),
        8 => Some("<:faceit8:1259604860383268905>"),
        9 => Some("<:faceit9:1259604862111318108>"),
        10 => Some("<:faceit10:1259604863864672286>"),
        _ => None,
    }
}
