//! Reserved-word table.
//!
//! Uses a sorted static array with binary search for `no_std` compatibility.
//! Lookup is case-insensitive: every entry is stored upper-case and the
//! candidate text is upper-cased byte by byte during comparison, so no
//! allocation happens per lookup.

use super::TokenKind;

/// Keyword entry mapping text to token kind.
struct KeywordEntry {
    text: &'static str,
    kind: TokenKind,
}

/// Sorted keyword table for binary search.
///
/// IMPORTANT: This table MUST be sorted by ASCII byte order of `text`.
/// The test `test_keywords_sorted` verifies this at test time.
// Hyphen (45) sorts before digits (48-57), which sort before letters.
static KEYWORDS: &[KeywordEntry] = &[
    KeywordEntry {
        text: "ACCESS",
        kind: TokenKind::KwAccess,
    },
    KeywordEntry {
        text: "ACCESSIBLE-FOR-NOTIFY",
        kind: TokenKind::KwAccessibleForNotify,
    },
    KeywordEntry {
        text: "AGENT-CAPABILITIES",
        kind: TokenKind::KwAgentCapabilities,
    },
    KeywordEntry {
        text: "APPLICATIONSYNTAX",
        kind: TokenKind::KwApplicationSyntax,
    },
    KeywordEntry {
        text: "AUGMENTS",
        kind: TokenKind::KwAugments,
    },
    KeywordEntry {
        text: "BEGIN",
        kind: TokenKind::KwBegin,
    },
    KeywordEntry {
        text: "BIT",
        kind: TokenKind::KwBit,
    },
    KeywordEntry {
        text: "BITS",
        kind: TokenKind::KwBits,
    },
    KeywordEntry {
        text: "BITSTRING",
        kind: TokenKind::KwBitString,
    },
    KeywordEntry {
        text: "CHOICE",
        kind: TokenKind::KwChoice,
    },
    KeywordEntry {
        text: "CONTACT-INFO",
        kind: TokenKind::KwContactInfo,
    },
    KeywordEntry {
        text: "COUNTER",
        kind: TokenKind::KwCounter,
    },
    KeywordEntry {
        text: "COUNTER32",
        kind: TokenKind::KwCounter32,
    },
    KeywordEntry {
        text: "COUNTER64",
        kind: TokenKind::KwCounter64,
    },
    KeywordEntry {
        text: "CREATION-REQUIRES",
        kind: TokenKind::KwCreationRequires,
    },
    KeywordEntry {
        text: "CURRENT",
        kind: TokenKind::KwCurrent,
    },
    KeywordEntry {
        text: "DEFINITIONS",
        kind: TokenKind::KwDefinitions,
    },
    KeywordEntry {
        text: "DEFVAL",
        kind: TokenKind::KwDefval,
    },
    KeywordEntry {
        text: "DEPRECATED",
        kind: TokenKind::KwDeprecated,
    },
    KeywordEntry {
        text: "DESCRIPTION",
        kind: TokenKind::KwDescription,
    },
    KeywordEntry {
        text: "DISPLAY-HINT",
        kind: TokenKind::KwDisplayHint,
    },
    KeywordEntry {
        text: "END",
        kind: TokenKind::KwEnd,
    },
    KeywordEntry {
        text: "ENTERPRISE",
        kind: TokenKind::KwEnterprise,
    },
    KeywordEntry {
        text: "EXPORTS",
        kind: TokenKind::KwExports,
    },
    KeywordEntry {
        text: "FROM",
        kind: TokenKind::KwFrom,
    },
    KeywordEntry {
        text: "GAUGE",
        kind: TokenKind::KwGauge,
    },
    KeywordEntry {
        text: "GAUGE32",
        kind: TokenKind::KwGauge32,
    },
    KeywordEntry {
        text: "GROUP",
        kind: TokenKind::KwGroup,
    },
    KeywordEntry {
        text: "IDENTIFIER",
        kind: TokenKind::KwIdentifier,
    },
    KeywordEntry {
        text: "IMPLICIT",
        kind: TokenKind::KwImplicit,
    },
    KeywordEntry {
        text: "IMPLIED",
        kind: TokenKind::KwImplied,
    },
    KeywordEntry {
        text: "IMPORTS",
        kind: TokenKind::KwImports,
    },
    KeywordEntry {
        text: "INCLUDES",
        kind: TokenKind::KwIncludes,
    },
    KeywordEntry {
        text: "INDEX",
        kind: TokenKind::KwIndex,
    },
    KeywordEntry {
        text: "INTEGER",
        kind: TokenKind::KwInteger,
    },
    KeywordEntry {
        text: "INTEGER32",
        kind: TokenKind::KwInteger32,
    },
    KeywordEntry {
        text: "IPADDRESS",
        kind: TokenKind::KwIpAddress,
    },
    KeywordEntry {
        text: "LAST-UPDATED",
        kind: TokenKind::KwLastUpdated,
    },
    KeywordEntry {
        text: "MACRO",
        kind: TokenKind::KwMacro,
    },
    KeywordEntry {
        text: "MANDATORY",
        kind: TokenKind::KwMandatory,
    },
    KeywordEntry {
        text: "MANDATORY-GROUPS",
        kind: TokenKind::KwMandatoryGroups,
    },
    KeywordEntry {
        text: "MAX-ACCESS",
        kind: TokenKind::KwMaxAccess,
    },
    KeywordEntry {
        text: "MIN-ACCESS",
        kind: TokenKind::KwMinAccess,
    },
    KeywordEntry {
        text: "MODULE",
        kind: TokenKind::KwModule,
    },
    KeywordEntry {
        text: "MODULE-COMPLIANCE",
        kind: TokenKind::KwModuleCompliance,
    },
    KeywordEntry {
        text: "MODULE-IDENTITY",
        kind: TokenKind::KwModuleIdentity,
    },
    KeywordEntry {
        text: "NETWORKADDRESS",
        kind: TokenKind::KwNetworkAddress,
    },
    KeywordEntry {
        text: "NOT-ACCESSIBLE",
        kind: TokenKind::KwNotAccessible,
    },
    KeywordEntry {
        text: "NOT-IMPLEMENTED",
        kind: TokenKind::KwNotImplemented,
    },
    KeywordEntry {
        text: "NOTIFICATION-GROUP",
        kind: TokenKind::KwNotificationGroup,
    },
    KeywordEntry {
        text: "NOTIFICATION-TYPE",
        kind: TokenKind::KwNotificationType,
    },
    KeywordEntry {
        text: "NOTIFICATIONNAME",
        kind: TokenKind::KwNotificationName,
    },
    KeywordEntry {
        text: "NOTIFICATIONS",
        kind: TokenKind::KwNotifications,
    },
    KeywordEntry {
        text: "NSAPADDRESS",
        kind: TokenKind::KwNsapAddress,
    },
    KeywordEntry {
        text: "NULL",
        kind: TokenKind::KwNull,
    },
    KeywordEntry {
        text: "NUM-ENTRIES",
        kind: TokenKind::KwNumEntries,
    },
    KeywordEntry {
        text: "OBJECT",
        kind: TokenKind::KwObject,
    },
    KeywordEntry {
        text: "OBJECT-GROUP",
        kind: TokenKind::KwObjectGroup,
    },
    KeywordEntry {
        text: "OBJECT-IDENTITY",
        kind: TokenKind::KwObjectIdentity,
    },
    KeywordEntry {
        text: "OBJECT-TYPE",
        kind: TokenKind::KwObjectType,
    },
    KeywordEntry {
        text: "OBJECTNAME",
        kind: TokenKind::KwObjectName,
    },
    KeywordEntry {
        text: "OBJECTS",
        kind: TokenKind::KwObjects,
    },
    KeywordEntry {
        text: "OBJECTSYNTAX",
        kind: TokenKind::KwObjectSyntax,
    },
    KeywordEntry {
        text: "OBSOLETE",
        kind: TokenKind::KwObsolete,
    },
    KeywordEntry {
        text: "OCTET",
        kind: TokenKind::KwOctet,
    },
    KeywordEntry {
        text: "OCTETSTRING",
        kind: TokenKind::KwOctetString,
    },
    KeywordEntry {
        text: "OF",
        kind: TokenKind::KwOf,
    },
    KeywordEntry {
        text: "OPAQUE",
        kind: TokenKind::KwOpaque,
    },
    KeywordEntry {
        text: "OPTIONAL",
        kind: TokenKind::KwOptional,
    },
    KeywordEntry {
        text: "ORGANIZATION",
        kind: TokenKind::KwOrganization,
    },
    KeywordEntry {
        text: "PRODUCT-RELEASE",
        kind: TokenKind::KwProductRelease,
    },
    KeywordEntry {
        text: "QUOTEDSTRING",
        kind: TokenKind::KwQuotedString,
    },
    KeywordEntry {
        text: "READ-CREATE",
        kind: TokenKind::KwReadCreate,
    },
    KeywordEntry {
        text: "READ-ONLY",
        kind: TokenKind::KwReadOnly,
    },
    KeywordEntry {
        text: "READ-WRITE",
        kind: TokenKind::KwReadWrite,
    },
    KeywordEntry {
        text: "REFERENCE",
        kind: TokenKind::KwReference,
    },
    KeywordEntry {
        text: "REVISION",
        kind: TokenKind::KwRevision,
    },
    KeywordEntry {
        text: "SEQUENCE",
        kind: TokenKind::KwSequence,
    },
    KeywordEntry {
        text: "SIMPLESYNTAX",
        kind: TokenKind::KwSimpleSyntax,
    },
    KeywordEntry {
        text: "SIZE",
        kind: TokenKind::KwSize,
    },
    KeywordEntry {
        text: "STATUS",
        kind: TokenKind::KwStatus,
    },
    KeywordEntry {
        text: "SUPPORTS",
        kind: TokenKind::KwSupports,
    },
    KeywordEntry {
        text: "SYNTAX",
        kind: TokenKind::KwSyntax,
    },
    KeywordEntry {
        text: "TEXTUAL-CONVENTION",
        kind: TokenKind::KwTextualConvention,
    },
    KeywordEntry {
        text: "TIMETICKS",
        kind: TokenKind::KwTimeTicks,
    },
    KeywordEntry {
        text: "TRAP-TYPE",
        kind: TokenKind::KwTrapType,
    },
    KeywordEntry {
        text: "UINTEGER32",
        kind: TokenKind::KwUInteger32,
    },
    KeywordEntry {
        text: "UNITS",
        kind: TokenKind::KwUnits,
    },
    KeywordEntry {
        text: "UNSIGNED32",
        kind: TokenKind::KwUnsigned32,
    },
    KeywordEntry {
        text: "VARIABLES",
        kind: TokenKind::KwVariables,
    },
    KeywordEntry {
        text: "VARIATION",
        kind: TokenKind::KwVariation,
    },
    KeywordEntry {
        text: "WRITE-ONLY",
        kind: TokenKind::KwWriteOnly,
    },
    KeywordEntry {
        text: "WRITE-SYNTAX",
        kind: TokenKind::KwWriteSyntax,
    },
];

/// Look up a reserved word, ignoring ASCII case.
///
/// Returns `None` for anything that is not in the table, including the
/// empty string.
#[must_use]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .binary_search_by(|entry| {
            entry
                .text
                .bytes()
                .cmp(text.bytes().map(|b| b.to_ascii_uppercase()))
        })
        .ok()
        .map(|idx| KEYWORDS[idx].kind)
}

/// Upper-case spelling of a reserved-word kind.
#[must_use]
pub fn keyword_text(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.text)
}

/// Iterate over every reserved word and its kind.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|entry| (entry.text, entry.kind))
}
