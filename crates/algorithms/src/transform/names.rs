//! Street name abbreviation
//!
//! Shortens the street type ("Street" -> "St") and leading or trailing
//! compass directions ("North" -> "N") of English street names, the way
//! they are printed on road maps.

fn street_type(word: &str) -> Option<&'static str> {
    let abbr = match word.to_ascii_lowercase().as_str() {
        "alley" => "Aly",
        "avenue" => "Ave",
        "boulevard" => "Blvd",
        "bridge" => "Brg",
        "circle" => "Cir",
        "court" => "Ct",
        "crescent" => "Cres",
        "drive" => "Dr",
        "expressway" => "Expy",
        "freeway" => "Fwy",
        "highway" => "Hwy",
        "lane" => "Ln",
        "parkway" => "Pkwy",
        "place" => "Pl",
        "plaza" => "Plz",
        "road" => "Rd",
        "square" => "Sq",
        "street" => "St",
        "terrace" => "Ter",
        "trail" => "Trl",
        "turnpike" => "Tpke",
        _ => return None,
    };
    Some(abbr)
}

fn direction(word: &str) -> Option<&'static str> {
    let abbr = match word.to_ascii_lowercase().as_str() {
        "north" => "N",
        "south" => "S",
        "east" => "E",
        "west" => "W",
        "northeast" => "NE",
        "northwest" => "NW",
        "southeast" => "SE",
        "southwest" => "SW",
        _ => return None,
    };
    Some(abbr)
}

/// Abbreviate a street name.
///
/// Only the last street type word is shortened, and directions only as the
/// first or last word. A name is never reduced to abbreviations alone, so
/// "North Street" stays as it is apart from its type ("North St").
pub fn short_street_name(name: &str) -> String {
    let mut words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 2 {
        return name.to_string();
    }

    let last = words.len() - 1;
    let has_trailing_direction = direction(words[last]).is_some();

    let type_at = if has_trailing_direction && last >= 2 {
        last - 1
    } else {
        last
    };
    let mut abbreviated = vec![false; words.len()];
    if type_at > 0 {
        if let Some(abbr) = street_type(words[type_at]) {
            words[type_at] = abbr;
            abbreviated[type_at] = true;
        }
    }

    if has_trailing_direction && type_at < last && type_at > 0 {
        if let Some(abbr) = direction(words[last]) {
            words[last] = abbr;
            abbreviated[last] = true;
        }
    }
    if abbreviated.iter().filter(|a| !**a).count() > 1 {
        if let Some(abbr) = direction(words[0]) {
            words[0] = abbr;
        }
    }

    words.join(" ")
}
