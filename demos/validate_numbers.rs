use kennung::bg::egn;
use kennung::no::kontonr;
use kennung::ro::onrc;

fn main() {
    // Check digits, embedded birth dates
    println!("=== Bulgarian EGN ===\n");

    let candidates = [
        "752316 926 3",
        "8032056031",
        "8019010008", // no such calendar date
        "7523169264", // bad check digit
        "75231692",   // too short
    ];

    for number in &candidates {
        match egn::validate(number) {
            Ok(compact) => {
                let born = egn::get_birth_date(&compact).unwrap();
                println!("  {number} => valid (compact: {compact}, born {born})");
            }
            Err(e) => println!("  {number} => INVALID: {e}"),
        }
    }

    // Two account shapes, postgiro prefix stripping, IBAN conversion
    println!("\n=== Norwegian bank accounts ===\n");

    let accounts = [
        "8601 11 17947",
        "0000.12.34566", // postgiro
        "1234566",
        "86011117946", // bad check digit
    ];

    for number in &accounts {
        match kontonr::validate(number) {
            Ok(compact) => println!(
                "  {number} => valid (formatted: {}, IBAN: {})",
                kontonr::format(&compact),
                kontonr::to_iban(&compact).unwrap()
            ),
            Err(e) => println!("  {number} => INVALID: {e}"),
        }
    }

    // Separator soup and full registration dates normalize away
    println!("\n=== Romanian trade register ===\n");

    let entries = [
        "J52/750/2012",
        "J 52 / 750 / 2012",
        "j5/750/2012",
        "J52/750/21.05.2012",
        "X52/750/2012", // unknown register letter
    ];

    for number in &entries {
        match onrc::validate(number) {
            Ok(compact) => println!("  {number} => valid (canonical: {compact})"),
            Err(e) => println!("  {number} => INVALID: {e}"),
        }
    }
}
