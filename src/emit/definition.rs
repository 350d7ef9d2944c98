// SPDX-License-Identifier: PMPL-1.0-or-later

//! Definition-mode rendering: the source unit holding the table storage.
//! Emits the language-state cells (both initialized to the first language),
//! the language-code array, one numeric constant per message id valued at
//! its sorted position, the blob and index literals, and the
//! `msg_get_string` lookup with its default-language fallback.
//!
//! The emitted lookup is intentionally unguarded: when neither the current
//! nor the default language has a translation, the offset stays -1 and the
//! returned pointer is out of bounds. That matches the consumers this
//! artifact is drop-in compatible with; the Rust-side runtime view in
//! `table` is where the guarded variant lives.

use crate::emit::{c_quote, initializer_rows};
use crate::table::StringTable;

pub fn render(table: &StringTable) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("#include <stdint.h>".to_string());
    lines.push(String::new());

    lines.push("int msg_current_lang = 0;".to_string());
    lines.push("int msg_default_lang = 0;".to_string());
    lines.push(String::new());

    lines.push("// language codes".to_string());
    let codes: Vec<String> = table.languages.iter().map(|l| c_quote(l)).collect();
    if codes.is_empty() {
        lines.push("const char *msg_codes_lang[] = { };".to_string());
    } else {
        lines.push(format!("const char *msg_codes_lang[] = {{ {} }};", codes.join(", ")));
    }
    lines.push(format!("#define MSG_NB_LANG {}", table.languages.len()));
    lines.push(String::new());

    lines.push("// message ids".to_string());
    lines.push(format!("#define MSG_NB_ID {}", table.ids.len()));
    for (idx, id) in table.ids.iter().enumerate() {
        lines.push(format!("#define {id} {idx}"));
    }
    lines.push(String::new());

    lines.push("// aggregated message block".to_string());
    lines.push("unsigned char msg_data[] = {".to_string());
    lines.push(format!("{} }};", initializer_rows(&table.blob).join(",\n")));
    lines.push(String::new());

    lines.push("// lookup index into msg_data".to_string());
    if table.index.is_empty() {
        lines.push("const int32_t msg_index[] = { };".to_string());
    } else {
        lines.push("const int32_t msg_index[] = {".to_string());
        lines.push(format!("{} }};", initializer_rows(&table.index).join(",\n")));
    }
    lines.push(String::new());

    lines.push("char *msg_get_string(int id) {".to_string());
    lines.push("    int i = msg_index[MSG_NB_LANG*id + msg_current_lang];".to_string());
    lines.push("    if (i == -1) i = msg_index[MSG_NB_LANG*id + msg_default_lang];".to_string());
    lines.push("    return (char *)&msg_data[i];".to_string());
    lines.push("}".to_string());

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;
    use crate::types::{Catalog, Message, Translation};

    fn tr(lang: &str, text: &str) -> Translation {
        Translation { lang: lang.to_string(), text: text.to_string() }
    }

    fn sample_table() -> StringTable {
        let catalog = Catalog::new(vec![
            Message {
                id: "HELLO".to_string(),
                translations: vec![tr("en", "Hi"), tr("fr", "Salut")],
            },
            Message { id: "BYE".to_string(), translations: vec![tr("en", "Bye")] },
        ]);
        table::build(&catalog).expect("build should succeed")
    }

    #[test]
    fn defines_state_cells_initialized_to_first_language() {
        let out = render(&sample_table());
        assert!(out.contains("int msg_current_lang = 0;"));
        assert!(out.contains("int msg_default_lang = 0;"));
    }

    #[test]
    fn language_codes_render_in_universe_order() {
        let out = render(&sample_table());
        assert!(out.contains("const char *msg_codes_lang[] = { \"en\", \"fr\" };"));
        assert!(out.contains("#define MSG_NB_LANG 2"));
    }

    #[test]
    fn per_id_constants_follow_sorted_positions() {
        let out = render(&sample_table());
        assert!(out.contains("#define MSG_NB_ID 2"));
        // ids sort to [BYE, HELLO]
        assert!(out.contains("#define BYE 0"));
        assert!(out.contains("#define HELLO 1"));
        let bye_pos = out.find("#define BYE 0").unwrap();
        let hello_pos = out.find("#define HELLO 1").unwrap();
        assert!(bye_pos < hello_pos, "constants should appear in IdSet order");
    }

    #[test]
    fn blob_and_index_literals_match_the_table() {
        let table = sample_table();
        let out = render(&table);

        let first_row: String = table
            .blob
            .iter()
            .take(20)
            .map(|b| b.to_string())
            .collect::<Vec<_>>()
            .join(",");
        assert!(out.contains(&first_row));

        let index_row: String =
            table.index.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
        assert!(out.contains(&index_row));
        // BYE has no fr translation
        assert!(index_row.contains("-1"));
    }

    #[test]
    fn lookup_function_keeps_the_unguarded_fallback() {
        let out = render(&sample_table());
        assert!(out.contains("char *msg_get_string(int id) {"));
        assert!(out.contains("int i = msg_index[MSG_NB_LANG*id + msg_current_lang];"));
        assert!(out.contains("if (i == -1) i = msg_index[MSG_NB_LANG*id + msg_default_lang];"));
        assert!(out.contains("return (char *)&msg_data[i];"));
    }

    #[test]
    fn data_len_is_not_defined_here() {
        let out = render(&sample_table());
        assert!(!out.contains("MSG_DATA_LEN"));
    }

    #[test]
    fn empty_catalog_renders_a_zero_block_and_empty_index() {
        let table = table::build(&Catalog::default()).expect("build should succeed");
        let out = render(&table);

        assert!(out.contains("const char *msg_codes_lang[] = { };"));
        assert!(out.contains("#define MSG_NB_ID 0"));
        assert!(out.contains("const int32_t msg_index[] = { };"));
        // 16 padding zeros
        assert!(out.contains("0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0 };"));
    }
}
