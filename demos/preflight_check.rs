use zahlung::core::*;
use zahlung::export::*;

fn main() {
    let mut store = MemoryStore::new();
    store.insert_counter_party(CounterParty {
        id: "SUP-001".into(),
        name: "Lieferant GmbH".into(),
        country: Some("DE".into()),
        default_bank_account: Some("BA-001".into()),
    });
    store.insert_bank_account(BankAccount {
        id: "BA-001".into(),
        iban: Some("DE89370400440532013000".into()),
        address: None,
    });
    store.insert_counter_party(CounterParty {
        id: "SUP-002".into(),
        name: "Bar Lieferant".into(),
        country: None,
        default_bank_account: None,
    });
    store.insert_counter_party(CounterParty {
        id: "SUP-003".into(),
        name: "Baz Lieferant".into(),
        country: None,
        default_bank_account: Some("BA-MISSING".into()),
    });

    // Check each supplier's banking details before attempting an export
    for id in ["SUP-001", "SUP-002", "SUP-003", "SUP-004"] {
        match check_counter_party_banking(&store, id) {
            Ok(findings) if findings.is_empty() => println!("{id}: payable"),
            Ok(findings) => {
                for finding in findings {
                    println!("{id}: {finding}");
                }
            }
            Err(e) => eprintln!("{id}: storage error: {e}"),
        }
    }
}
