// SPDX-License-Identifier: PMPL-1.0-or-later

//! Declaration-mode rendering: the header surface a consuming translation
//! unit includes. Declares the language-state cells, the lookup function,
//! the `_MSG` access macro, and externs for the storage that the
//! definition artifact provides. Per-id constants live in the definition
//! artifact, not here; the padded blob length lives only here.

use crate::table::StringTable;

pub fn render(table: &StringTable) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("#include <stdint.h>".to_string());
    lines.push(String::new());
    lines.push("#ifdef __cplusplus".to_string());
    lines.push("extern \"C\" {".to_string());
    lines.push("#endif".to_string());
    lines.push(String::new());

    lines.push("extern int msg_current_lang;".to_string());
    lines.push("extern int msg_default_lang;".to_string());
    lines.push(String::new());

    lines.push("char *msg_get_string(int id);".to_string());
    lines.push(
        "#define _MSG(id) (&msg_data[msg_index[MSG_NB_LANG*id + msg_current_lang]])".to_string(),
    );
    lines.push(String::new());

    lines.push("// language codes".to_string());
    lines.push(format!("#define MSG_NB_LANG {}", table.languages.len()));
    lines.push("extern const char *msg_codes_lang[];".to_string());
    lines.push(String::new());

    lines.push("// aggregated message block and lookup index".to_string());
    lines.push("extern const unsigned char msg_data[];".to_string());
    lines.push("extern const int32_t msg_index[];".to_string());
    lines.push(format!("#define MSG_DATA_LEN {}", table.blob.len()));
    lines.push(String::new());

    lines.push("#ifdef __cplusplus".to_string());
    lines.push("}".to_string());
    lines.push("#endif".to_string());

    lines.join("\n") + "\n"
}
