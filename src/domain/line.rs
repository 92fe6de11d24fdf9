/// A metro line and the stations it serves, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub name: String,
    pub stations: Vec<String>,
}

impl Line {
    pub fn new<S: Into<String>>(name: S, stations: &[&str]) -> Self {
        Self {
            name: name.into(),
            stations: stations.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const NETWORK: &[(&str, &[&str])] = &[
    (
        "north-south",
        &[
            "Jurong East", "Bukit Batok", "Bukit Gombak", "Choa Chu Kang", "Yew Tee", "Kranji",
            "Marsiling", "Woodlands", "Admiralty", "Sembawang", "Canberra", "Yishun", "Khatib",
            "Yio Chu Kang", "Ang Mo Kio", "Bishan", "Braddell", "Toa Payoh", "Novena", "Newton",
            "Orchard", "Somerset", "Dhoby Ghaut", "City Hall", "Raffles Place", "Pier",
        ],
    ),
    (
        "east-west",
        &[
            "Pasir Ris", "Tampines", "Simei", "Tanah Merah", "Bedok", "Kembangan", "Eunos",
            "Paya Lebar", "Aljunied", "Kallang", "Lavender", "Bugis", "Tanjong Pagar",
            "Outram Park", "Tiong Bahru", "Redhill", "Queenstown", "Commonwealth", "Buona Vista",
            "Dover", "Clementi", "Chinese Garden", "Lakeside", "Boon Lay", "Pioneer", "Joo Koon",
            "Gul Circle", "Tuas Crescent", "Tuas West Road", "Tuas Link", "Expo",
        ],
    ),
    (
        "north-east",
        &[
            "Chinatown", "Clarke Quay", "Little India", "Farrer Park", "Boon Keng",
            "Potong Pasir", "Serangoon", "Kovan", "Hougang", "Buangkok", "Sengkang", "Punggol",
        ],
    ),
    (
        "circle",
        &[
            "Esplanade", "Promenade", "Nicoll Highway", "Stadium", "Caldecott",
            "Botanic Gardens", "Holland Village", "one-north", "Bayfront",
        ],
    ),
    (
        "downtown",
        &[
            "Bukit Panjang", "Hillview", "Beauty World", "King Albert Park", "Sixth Avenue",
            "Newton", "Rochor", "Little India", "Bugis", "Promenade", "Downtown", "Telok Ayer",
            "Chinatown", "Bencoolen", "Jalan Besar", "Bendemeer", "Geylang Bahru", "Mattar",
            "MacPherson", "Ubi", "Kaki Bukit", "Bedok Reservoir", "Tampines East", "Expo",
        ],
    ),
    (
        "thomson-east-coast",
        &[
            "Woodlands South", "Springleaf", "Lentor", "Mayflower", "Bright Hill",
            "Upper Thomson", "Caldecott",
        ],
    ),
];

/// The MRT lines searched by default.
pub fn mrt_lines() -> Vec<Line> {
    NETWORK
        .iter()
        .map(|(name, stations)| Line::new(*name, stations))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_has_six_lines() {
        let names: Vec<String> = mrt_lines().into_iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec![
                "north-south",
                "east-west",
                "north-east",
                "circle",
                "downtown",
                "thomson-east-coast"
            ]
        );
    }

    #[test]
    fn test_line_keeps_station_order() {
        let line = Line::new("test", &["B", "A", "C"]);
        assert_eq!(line.stations, vec!["B", "A", "C"]);
    }
}
