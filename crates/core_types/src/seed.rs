//! Seed roster used when nothing has been persisted yet.

use crate::{Member, MemberStatus};

/// Teams every seeded member belongs to.
const SEED_TEAMS: [&str; 3] = ["Design", "Product", "Marketing"];

/// Load the builtin sample roster.
pub fn seed_members() -> Vec<Member> {
    vec![
        seed("1", "Farouk Muhammed", "FM", "Product Designer", "olivia@untitledui.com"),
        seed("2", "Saliu Hammed", "SH", "Product Designer", "olivia@untitledui.com"),
        seed("3", "Farouk Muhammed", "FM", "Product Designer", "olivia@untitledui.com"),
        seed("4", "Ahmed Ibrahim", "AI", "Frontend Developer", "ahmed@untitledui.com"),
        seed("5", "Aisha Johnson", "AJ", "UX Designer", "aisha@untitledui.com"),
        seed("6", "Chidi Okonkwo", "CO", "Backend Developer", "chidi@untitledui.com"),
        seed("7", "Ngozi Adeyemi", "NA", "Product Manager", "ngozi@untitledui.com"),
        seed("8", "Tunde Williams", "TW", "Data Analyst", "tunde@untitledui.com"),
        seed("9", "Zainab Hassan", "ZH", "Marketing Manager", "zainab@untitledui.com"),
        seed("10", "Emeka Nwosu", "EN", "DevOps Engineer", "emeka@untitledui.com"),
    ]
}

fn seed(id: &str, name: &str, avatar: &str, role: &str, email: &str) -> Member {
    Member {
        id: id.into(),
        name: name.into(),
        avatar: avatar.into(),
        status: MemberStatus::Active,
        role: role.into(),
        email: email.into(),
        teams: SEED_TEAMS.iter().map(|t| t.to_string()).collect(),
        extra_teams: 4,
    }
}
