use kennung::{get_validator, list_kinds, lookup};

fn main() {
    println!("=== Registered identifier kinds ===\n");

    for &kind in list_kinds() {
        let validator = get_validator(kind);
        println!("  {:<12} {}", kind.as_str(), validator.name());
    }

    // Kind names arrive from config files or user input; lookup is lenient
    // about case and separator style.
    println!("\n=== Dispatch by name ===\n");

    let inputs = [
        ("bg_vat", "BG 175 074 752"),
        ("NZ-IRD", "49-091-850"),
        ("pk.cnic", "34201-0891231-8"),
        ("kr_brn", "116-82-00276"),
        ("ma_ice", "001561191000065"), // bad checksum
        ("de_ustid", "DE123456789"),   // unknown kind
    ];

    for (name, number) in &inputs {
        match lookup(name) {
            Ok(validator) => match validator.validate(number) {
                Ok(compact) => {
                    let pretty = validator
                        .format(&compact)
                        .unwrap_or_else(|| compact.clone());
                    println!("  {name}: {number} => valid ({pretty})");
                }
                Err(e) => println!("  {name}: {number} => INVALID: {e}"),
            },
            Err(e) => println!("  {name}: {e}"),
        }
    }
}
