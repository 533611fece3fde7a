//! Property-based tests for substitution, modifier decoding and binding joins.

use bindsheet::format::{join_binding, BindingStyle};
use bindsheet::modmask::decode_modmask;
use bindsheet::tables::{ARGS, DISPATCHERS, KEYS, MODIFIERS};
use proptest::prelude::*;

proptest! {
    /// Tokens absent from a table come back unchanged, case included.
    #[test]
    fn substitution_falls_back_to_token(token in "[A-Za-z0-9_:]{0,16}") {
        for table in [&KEYS, &ARGS, &DISPATCHERS] {
            if table.get(&token).is_none() {
                prop_assert_eq!(table.substitute(&token), token.as_str());
            }
        }
    }

    /// Lookup ignores case.
    #[test]
    fn substitution_ignores_case(index in 0usize..29, upper in any::<bool>()) {
        let (key, glyph) = KEYS.iter().nth(index % KEYS.len()).unwrap();
        let token = if upper { key.to_uppercase() } else { key.to_string() };
        prop_assert_eq!(KEYS.substitute(&token), glyph);
    }

    /// The primary modifier leads, the rest follow in bit order, nothing past the table.
    #[test]
    fn decode_orders_primary_first(mask in any::<u64>()) {
        let decoded = MODIFIERS.decode(mask);
        let primary = MODIFIERS.primary();
        let primary_held = mask & (1 << primary) != 0;

        let expected_len = (0..MODIFIERS.len()).filter(|bit| mask & (1 << bit) != 0).count();
        prop_assert_eq!(decoded.len(), expected_len);

        let rest = if primary_held {
            prop_assert_eq!(decoded[0], MODIFIERS.symbol(primary).unwrap());
            &decoded[1..]
        } else {
            &decoded[..]
        };
        let expected_rest: Vec<&str> = (0..MODIFIERS.len())
            .filter(|&bit| bit != primary && mask & (1 << bit) != 0)
            .filter_map(|bit| MODIFIERS.symbol(bit))
            .collect();
        prop_assert_eq!(rest.to_vec(), expected_rest);
    }

    /// Decoding against any table never yields more symbols than the table has.
    #[test]
    fn decode_stays_within_table(mask in any::<u64>(), len in 0usize..10, primary in 0usize..12) {
        let symbols: Vec<String> = (0..len).map(|i| format!("m{}", i)).collect();
        let refs: Vec<&str> = symbols.iter().map(String::as_str).collect();
        let decoded = decode_modmask(mask, &refs, primary);
        prop_assert!(decoded.len() <= len);
        prop_assert!(decoded.iter().all(|symbol| refs.contains(symbol)));
    }

    /// Without modifiers the binding is exactly the key.
    #[test]
    fn join_without_modifiers_is_key(key in "[a-z0-9 ]{0,8}") {
        prop_assert_eq!(join_binding("", &key, &BindingStyle::default()), key);
    }
}
