use crate::model::Team;

struct TeamRow {
    id: i64,
    city: &'static str,
    nickname: &'static str,
    abbreviation: &'static str,
}

// The provider integration ships its own team directory; we carry it in-crate
// the same way. Ids are the league's canonical franchise ids.
const TEAM_DIRECTORY: &[TeamRow] = &[
    TeamRow { id: 1_610_612_737, city: "Atlanta", nickname: "Hawks", abbreviation: "ATL" },
    TeamRow { id: 1_610_612_738, city: "Boston", nickname: "Celtics", abbreviation: "BOS" },
    TeamRow { id: 1_610_612_739, city: "Cleveland", nickname: "Cavaliers", abbreviation: "CLE" },
    TeamRow { id: 1_610_612_740, city: "New Orleans", nickname: "Pelicans", abbreviation: "NOP" },
    TeamRow { id: 1_610_612_741, city: "Chicago", nickname: "Bulls", abbreviation: "CHI" },
    TeamRow { id: 1_610_612_742, city: "Dallas", nickname: "Mavericks", abbreviation: "DAL" },
    TeamRow { id: 1_610_612_743, city: "Denver", nickname: "Nuggets", abbreviation: "DEN" },
    TeamRow { id: 1_610_612_744, city: "Golden State", nickname: "Warriors", abbreviation: "GSW" },
    TeamRow { id: 1_610_612_745, city: "Houston", nickname: "Rockets", abbreviation: "HOU" },
    TeamRow { id: 1_610_612_746, city: "Los Angeles", nickname: "Clippers", abbreviation: "LAC" },
    TeamRow { id: 1_610_612_747, city: "Los Angeles", nickname: "Lakers", abbreviation: "LAL" },
    TeamRow { id: 1_610_612_748, city: "Miami", nickname: "Heat", abbreviation: "MIA" },
    TeamRow { id: 1_610_612_749, city: "Milwaukee", nickname: "Bucks", abbreviation: "MIL" },
    TeamRow { id: 1_610_612_750, city: "Minnesota", nickname: "Timberwolves", abbreviation: "MIN" },
    TeamRow { id: 1_610_612_751, city: "Brooklyn", nickname: "Nets", abbreviation: "BKN" },
    TeamRow { id: 1_610_612_752, city: "New York", nickname: "Knicks", abbreviation: "NYK" },
    TeamRow { id: 1_610_612_753, city: "Orlando", nickname: "Magic", abbreviation: "ORL" },
    TeamRow { id: 1_610_612_754, city: "Indiana", nickname: "Pacers", abbreviation: "IND" },
    TeamRow { id: 1_610_612_755, city: "Philadelphia", nickname: "76ers", abbreviation: "PHI" },
    TeamRow { id: 1_610_612_756, city: "Phoenix", nickname: "Suns", abbreviation: "PHX" },
    TeamRow { id: 1_610_612_757, city: "Portland", nickname: "Trail Blazers", abbreviation: "POR" },
    TeamRow { id: 1_610_612_758, city: "Sacramento", nickname: "Kings", abbreviation: "SAC" },
    TeamRow { id: 1_610_612_759, city: "San Antonio", nickname: "Spurs", abbreviation: "SAS" },
    TeamRow { id: 1_610_612_760, city: "Oklahoma City", nickname: "Thunder", abbreviation: "OKC" },
    TeamRow { id: 1_610_612_761, city: "Toronto", nickname: "Raptors", abbreviation: "TOR" },
    TeamRow { id: 1_610_612_762, city: "Utah", nickname: "Jazz", abbreviation: "UTA" },
    TeamRow { id: 1_610_612_763, city: "Memphis", nickname: "Grizzlies", abbreviation: "MEM" },
    TeamRow { id: 1_610_612_764, city: "Washington", nickname: "Wizards", abbreviation: "WAS" },
    TeamRow { id: 1_610_612_765, city: "Detroit", nickname: "Pistons", abbreviation: "DET" },
    TeamRow { id: 1_610_612_766, city: "Charlotte", nickname: "Hornets", abbreviation: "CHA" },
];

fn to_team(row: &TeamRow) -> Team {
    Team {
        id: row.id,
        full_name: format!("{} {}", row.city, row.nickname),
        abbreviation: row.abbreviation.to_string(),
        nickname: row.nickname.to_string(),
        city: row.city.to_string(),
    }
}

pub fn all_teams() -> Vec<Team> {
    TEAM_DIRECTORY.iter().map(to_team).collect()
}

pub fn team_by_id(id: i64) -> Option<Team> {
    TEAM_DIRECTORY.iter().find(|t| t.id == id).map(to_team)
}

pub fn abbreviation_for(id: i64) -> Option<&'static str> {
    TEAM_DIRECTORY
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.abbreviation)
}
