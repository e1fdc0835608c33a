//! RISC-V assembly rule table.
//!
//! Specific lexical classes (registers, CSRs, mnemonics, directives) come
//! before the generic `labels`, `number` and `last-literals` rules so a known
//! keyword is never swallowed by a catch-all. Order is priority.

use crate::{Grammar, LanguageInfo, LanguageRegistry, Result, RuleSpec};

/// Registry key for RISC-V assembly.
pub const LANGUAGE_ID: &str = "riscv";

/// Display title.
pub const TITLE: &str = "RISC-V";

/// Grammar maintainer, as listed in the highlighter's component manifest.
pub const OWNER: &str = "shinbokuow2";

/// The rule table, highest priority first.
pub const RULES: &[RuleSpec] = &[
    RuleSpec::new("comment", r"#.*(?:\n|\z)"),
    RuleSpec::new(
        "general-registers",
        r"\b(?:x[1-2]?[0-9]|x30|x31|zero|ra|sp|gp|tp|fp|t[0-6]|s[0-9]|s1[0-1]|a[0-7]|pc)\b",
    )
    .with_alias("class-name"),
    // The trailing empty alternative lets a bare `s` match.
    RuleSpec::new(
        "s-mode-csrs",
        r"\bs(?:status|tvec|ip|ie|counteren|scratch|epc|cause|tval|atp|)\b",
    )
    .with_alias("class-name"),
    // Timer and counter CSRs are not covered.
    RuleSpec::new(
        "m-mode-csrs",
        r"\bm(?:isa|vendorid|archid|hardid|status|tvec|ideleg|ip|ie|counteren|scratch|epc|cause|tval)\b",
    )
    .with_alias("class-name"),
    RuleSpec::new(
        "rv32/64i-instructions",
        r"\b(?:addi?w?|slti?u?|(?:and|or|xor)i?|(?:sll|srl|sra)i?w?|lui|auipc|subw?|jal|jalr|beq|bne|bltu?|bgeu?|s[bhwd]|l[bhw]u?|ld)\b",
    )
    .with_alias("keyword"),
    RuleSpec::new("csr-instructions", r"\bcsrr?[rwsc]i?\b").with_alias("keyword"),
    RuleSpec::new(
        "privilege-instructions",
        r"\b(?:ecall|ebreak|[msu]ret|wfi|sfence\.vma)\b",
    )
    .with_alias("keyword"),
    RuleSpec::new(
        "pseudo-instructions",
        r"\b(?:nop|li|la|mv|not|neg|negw|sext\.w|seqz|snez|sltz|sgtz|f(?:mv|abs|neg)\.(?:s|d)|b(?:eq|ne|le|ge|lt)z|bgt|ble|bgtu|bleu|j|jr|ret|call)\b",
    )
    .with_alias("important"),
    RuleSpec::new(
        "relocation-functions",
        r"%(?:hi|lo|pcrel_hi|pcrel_lo|tprel_(?:hi|lo|add))",
    )
    .with_alias("important"),
    // Literal word, not a general operator-symbol matcher.
    RuleSpec::new("operator", "operator"),
    RuleSpec::new(
        "data-emitting-directives",
        r"\.(?:2byte|4byte|8byte|quad|half|word|dword|byte|dtpreldword|dtprelword|sleb128|uleb128|asciz|string|incbin|zero)\b",
    )
    .with_alias("tag"),
    RuleSpec::new("alignment-directives", r"\.(?:align|balign|p2align)\b").with_alias("tag"),
    RuleSpec::new("symbol-directives", r"\.(?:globl|local|equ)\b").with_alias("tag"),
    RuleSpec::new(
        "section-directives",
        r"\.(?:text|data|rodata|bss|comm|common|section)\b",
    )
    .with_alias("tag"),
    RuleSpec::new(
        "miscellaneous-directives",
        r"\.(?:option|macro|endm|file|ident|size|type)\b",
    )
    .with_alias("tag"),
    RuleSpec::new("labels", r"\S*:").with_alias("operator"),
    RuleSpec::new("number", r"\b(?:0x[0-9a-fA-F]+|0o[0-7]+|[0-9]+)\b"),
    // A word-bounded run, or else one non-whitespace character, so every
    // non-whitespace character ends up classified.
    RuleSpec::new("last-literals", r"\b\S*\b|\S").with_alias("operator"),
];

/// Compile the RISC-V rule table.
///
/// # Errors
///
/// Returns an error if a pattern in [`RULES`] fails to compile.
pub fn grammar() -> Result<Grammar> {
    Grammar::compile(LANGUAGE_ID, RULES)
}

/// Registry metadata for RISC-V.
#[must_use]
pub fn language_info() -> LanguageInfo {
    LanguageInfo::new(LANGUAGE_ID, TITLE).with_owner(OWNER)
}

/// Compile the table and register it under [`LANGUAGE_ID`].
///
/// Replaces an earlier RISC-V registration. On failure the registry is left
/// untouched.
///
/// # Errors
///
/// Returns an error if the table fails to compile.
pub fn register(registry: &mut LanguageRegistry) -> Result<()> {
    registry.register(language_info(), RULES).map(|_| ())
}
