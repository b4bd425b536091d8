/// Radio-call text utilities: phonetic alphabet and callsign handling
use regex::Regex;

/// Lowercases, strips punctuation and collapses whitespace, matching how
/// trainee radio calls are normalized before comparison.
pub fn process_string(text: &str) -> String {
    trim_spaces(&remove_punctuation(&text.to_lowercase()))
}

/// Replaces all punctuation with spaces, keeping digits, word characters,
/// dots and dashes (and commas between digits, e.g. "1,013").
pub fn remove_punctuation(text: &str) -> String {
    let re = Regex::new(r"[^\d\w\s.,-]").unwrap();
    let cleaned = re.replace_all(text, " ");
    // Commas survive only as digit group separators
    let re_comma = Regex::new(r"(\d),(\d)").unwrap();
    let cleaned = re_comma.replace_all(&cleaned, "${1}${2}");
    cleaned.replace(',', " ")
}

/// Shortens all runs of whitespace to a single space.
pub fn trim_spaces(text: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(text, " ").trim().to_string()
}

/// True for a standard registration callsign of the form "G-OFLY".
pub fn is_standard_registration(callsign: &str) -> bool {
    callsign.len() == 6 && callsign.as_bytes()[1] == b'-'
}

/// Abbreviates a callsign the way ATC does once contact is established:
/// "G-OFLY" becomes "G-LY", word callsigns keep their first word.
pub fn abbreviated_callsign(callsign: &str) -> String {
    if callsign.len() == 6 {
        if is_standard_registration(callsign) {
            let chars: Vec<char> = callsign.chars().collect();
            return format!("{}-{}{}", chars[0], chars[4], chars[5]);
        }
        return callsign.to_string();
    }
    callsign.split(' ').next().unwrap_or(callsign).to_string()
}

fn phonetic_letter(c: char) -> Option<&'static str> {
    Some(match c {
        'A' => "Alpha",
        'B' => "Bravo",
        'C' => "Charlie",
        'D' => "Delta",
        'E' => "Echo",
        'F' => "Foxtrot",
        'G' => "Golf",
        'H' => "Hotel",
        'I' => "India",
        'J' => "Juliet",
        'K' => "Kilo",
        'L' => "Lima",
        'M' => "Mike",
        'N' => "November",
        'O' => "Oscar",
        'P' => "Papa",
        'Q' => "Quebec",
        'R' => "Romeo",
        'S' => "Sierra",
        'T' => "Tango",
        'U' => "Uniform",
        'V' => "Victor",
        'W' => "Whiskey",
        'X' => "X-ray",
        'Y' => "Yankee",
        'Z' => "Zulu",
        _ => return None,
    })
}

fn phonetic_digit(c: char) -> Option<&'static str> {
    Some(match c {
        '0' => "Zero",
        '1' => "One",
        '2' => "Two",
        '3' => "Three",
        '4' => "Four",
        '5' => "Five",
        '6' => "Six",
        '7' => "Seven",
        '8' => "Eight",
        '9' => "Niner",
        _ => return None,
    })
}

/// Spells text in the NATO phonetic alphabet: "G-OFLY" becomes
/// "Golf Oscar Foxtrot Lima Yankee". Hyphens are dropped, dots read "Decimal".
pub fn replace_with_phonetic_alphabet(text: &str) -> String {
    let mut result = String::new();
    for c in text.to_uppercase().chars() {
        if let Some(word) = phonetic_letter(c) {
            result.push_str(word);
            result.push(' ');
        } else if let Some(word) = phonetic_digit(c) {
            result.push_str(word);
            result.push(' ');
        } else if c == '-' {
            continue;
        } else if c == '.' {
            result.push_str("Decimal ");
        } else {
            result.push(c);
            result.push(' ');
        }
    }
    result.trim_end().to_string()
}

/// Reads a number digit by digit, e.g. QNH 1013 as "One Zero One Three".
pub fn number_to_phonetic_string(number: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, number);
    let mut result = String::new();
    for c in text.chars() {
        if let Some(word) = phonetic_digit(c) {
            // Plain "Nine" for spoken numbers, "Niner" stays for callsigns
            result.push_str(if c == '9' { "Nine" } else { word });
            result.push(' ');
        } else if c == '-' {
            result.push_str("Minus ");
        } else if c == '.' {
            result.push_str("Decimal ");
        } else {
            result.push(c);
            result.push(' ');
        }
    }
    result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_string() {
        assert_eq!(
            process_string("Golf  Oscar, Foxtrot!  Lima   Yankee"),
            "golf oscar foxtrot lima yankee"
        );
        assert_eq!(process_string("QNH 1,013"), "qnh 1013");
    }

    #[test]
    fn test_abbreviated_callsign() {
        assert_eq!(abbreviated_callsign("G-OFLY"), "G-LY");
        assert_eq!(abbreviated_callsign("GOFLYA"), "GOFLYA");
        assert_eq!(abbreviated_callsign("Speedbird 123"), "Speedbird");
    }

    #[test]
    fn test_phonetic_alphabet() {
        assert_eq!(
            replace_with_phonetic_alphabet("G-OFLY"),
            "Golf Oscar Foxtrot Lima Yankee"
        );
        assert_eq!(replace_with_phonetic_alphabet("121.9"), "One Two One Decimal Niner");
    }

    #[test]
    fn test_number_to_phonetic_string() {
        assert_eq!(number_to_phonetic_string(1013.0, 0), "One Zero One Three");
        assert_eq!(number_to_phonetic_string(118.43, 2), "One One Eight Decimal Four Three");
    }
}
