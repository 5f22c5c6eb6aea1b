//! The single-byte record-type discriminator that heads every record on the
//! wire.
//!
//! Record types fall into three contiguous ranges ([`RecordType::is_element`],
//! [`RecordType::is_attribute`], [`RecordType::is_text_record`]); within the
//! element and attribute ranges, the lettered `Prefix*{A..Z}` variants also
//! encode a single-lowercase-letter prefix directly in the byte value (see
//! [`RecordType::prefix_letter`]).

/// A record-type byte. Values match the on-wire representation exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RecordType {
    EndElement = 0x01,
    Comment = 0x02,
    Array = 0x03,
    ShortAttribute = 0x04,
    Attribute = 0x05,
    ShortDictionaryAttribute = 0x06,
    DictionaryAttribute = 0x07,
    ShortXmlnsAttribute = 0x08,
    XmlnsAttribute = 0x09,
    ShortDictionaryXmlnsAttribute = 0x0A,
    DictionaryXmlnsAttribute = 0x0B,
    PrefixDictionaryAttributeA = 0x0C,
    PrefixDictionaryAttributeB = 0x0D,
    PrefixDictionaryAttributeC = 0x0E,
    PrefixDictionaryAttributeD = 0x0F,
    PrefixDictionaryAttributeE = 0x10,
    PrefixDictionaryAttributeF = 0x11,
    PrefixDictionaryAttributeG = 0x12,
    PrefixDictionaryAttributeH = 0x13,
    PrefixDictionaryAttributeI = 0x14,
    PrefixDictionaryAttributeJ = 0x15,
    PrefixDictionaryAttributeK = 0x16,
    PrefixDictionaryAttributeL = 0x17,
    PrefixDictionaryAttributeM = 0x18,
    PrefixDictionaryAttributeN = 0x19,
    PrefixDictionaryAttributeO = 0x1A,
    PrefixDictionaryAttributeP = 0x1B,
    PrefixDictionaryAttributeQ = 0x1C,
    PrefixDictionaryAttributeR = 0x1D,
    PrefixDictionaryAttributeS = 0x1E,
    PrefixDictionaryAttributeT = 0x1F,
    PrefixDictionaryAttributeU = 0x20,
    PrefixDictionaryAttributeV = 0x21,
    PrefixDictionaryAttributeW = 0x22,
    PrefixDictionaryAttributeX = 0x23,
    PrefixDictionaryAttributeY = 0x24,
    PrefixDictionaryAttributeZ = 0x25,
    PrefixAttributeA = 0x26,
    PrefixAttributeB = 0x27,
    PrefixAttributeC = 0x28,
    PrefixAttributeD = 0x29,
    PrefixAttributeE = 0x2A,
    PrefixAttributeF = 0x2B,
    PrefixAttributeG = 0x2C,
    PrefixAttributeH = 0x2D,
    PrefixAttributeI = 0x2E,
    PrefixAttributeJ = 0x2F,
    PrefixAttributeK = 0x30,
    PrefixAttributeL = 0x31,
    PrefixAttributeM = 0x32,
    PrefixAttributeN = 0x33,
    PrefixAttributeO = 0x34,
    PrefixAttributeP = 0x35,
    PrefixAttributeQ = 0x36,
    PrefixAttributeR = 0x37,
    PrefixAttributeS = 0x38,
    PrefixAttributeT = 0x39,
    PrefixAttributeU = 0x3A,
    PrefixAttributeV = 0x3B,
    PrefixAttributeW = 0x3C,
    PrefixAttributeX = 0x3D,
    PrefixAttributeY = 0x3E,
    PrefixAttributeZ = 0x3F,
    ShortElement = 0x40,
    Element = 0x41,
    ShortDictionaryElement = 0x42,
    DictionaryElement = 0x43,
    PrefixDictionaryElementA = 0x44,
    PrefixDictionaryElementB = 0x45,
    PrefixDictionaryElementC = 0x46,
    PrefixDictionaryElementD = 0x47,
    PrefixDictionaryElementE = 0x48,
    PrefixDictionaryElementF = 0x49,
    PrefixDictionaryElementG = 0x4A,
    PrefixDictionaryElementH = 0x4B,
    PrefixDictionaryElementI = 0x4C,
    PrefixDictionaryElementJ = 0x4D,
    PrefixDictionaryElementK = 0x4E,
    PrefixDictionaryElementL = 0x4F,
    PrefixDictionaryElementM = 0x50,
    PrefixDictionaryElementN = 0x51,
    PrefixDictionaryElementO = 0x52,
    PrefixDictionaryElementP = 0x53,
    PrefixDictionaryElementQ = 0x54,
    PrefixDictionaryElementR = 0x55,
    PrefixDictionaryElementS = 0x56,
    PrefixDictionaryElementT = 0x57,
    PrefixDictionaryElementU = 0x58,
    PrefixDictionaryElementV = 0x59,
    PrefixDictionaryElementW = 0x5A,
    PrefixDictionaryElementX = 0x5B,
    PrefixDictionaryElementY = 0x5C,
    PrefixDictionaryElementZ = 0x5D,
    PrefixElementA = 0x5E,
    PrefixElementB = 0x5F,
    PrefixElementC = 0x60,
    PrefixElementD = 0x61,
    PrefixElementE = 0x62,
    PrefixElementF = 0x63,
    PrefixElementG = 0x64,
    PrefixElementH = 0x65,
    PrefixElementI = 0x66,
    PrefixElementJ = 0x67,
    PrefixElementK = 0x68,
    PrefixElementL = 0x69,
    PrefixElementM = 0x6A,
    PrefixElementN = 0x6B,
    PrefixElementO = 0x6C,
    PrefixElementP = 0x6D,
    PrefixElementQ = 0x6E,
    PrefixElementR = 0x6F,
    PrefixElementS = 0x70,
    PrefixElementT = 0x71,
    PrefixElementU = 0x72,
    PrefixElementV = 0x73,
    PrefixElementW = 0x74,
    PrefixElementX = 0x75,
    PrefixElementY = 0x76,
    PrefixElementZ = 0x77,
    ZeroText = 0x80,
    ZeroTextWithEndElement = 0x81,
    OneText = 0x82,
    OneTextWithEndElement = 0x83,
    FalseText = 0x84,
    FalseTextWithEndElement = 0x85,
    TrueText = 0x86,
    TrueTextWithEndElement = 0x87,
    Int8Text = 0x88,
    Int8TextWithEndElement = 0x89,
    Int16Text = 0x8A,
    Int16TextWithEndElement = 0x8B,
    Int32Text = 0x8C,
    Int32TextWithEndElement = 0x8D,
    Int64Text = 0x8E,
    Int64TextWithEndElement = 0x8F,
    FloatText = 0x90,
    FloatTextWithEndElement = 0x91,
    DoubleText = 0x92,
    DoubleTextWithEndElement = 0x93,
    DecimalText = 0x94,
    DecimalTextWithEndElement = 0x95,
    DateTimeText = 0x96,
    DateTimeTextWithEndElement = 0x97,
    Chars8Text = 0x98,
    Chars8TextWithEndElement = 0x99,
    Chars16Text = 0x9A,
    Chars16TextWithEndElement = 0x9B,
    Chars32Text = 0x9C,
    Chars32TextWithEndElement = 0x9D,
    Bytes8Text = 0x9E,
    Bytes8TextWithEndElement = 0x9F,
    Bytes16Text = 0xA0,
    Bytes16TextWithEndElement = 0xA1,
    Bytes32Text = 0xA2,
    Bytes32TextWithEndElement = 0xA3,
    StartListText = 0xA4,
    EndListText = 0xA6,
    EmptyText = 0xA8,
    EmptyTextWithEndElement = 0xA9,
    DictionaryText = 0xAA,
    DictionaryTextWithEndElement = 0xAB,
    UniqueIdText = 0xAC,
    UniqueIdTextWithEndElement = 0xAD,
    TimeSpanText = 0xAE,
    TimeSpanTextWithEndElement = 0xAF,
    UuidText = 0xB0,
    UuidTextWithEndElement = 0xB1,
    UInt64Text = 0xB2,
    UInt64TextWithEndElement = 0xB3,
    BoolText = 0xB4,
    BoolTextWithEndElement = 0xB5,
    UnicodeChars8Text = 0xB6,
    UnicodeChars8TextWithEndElement = 0xB7,
    UnicodeChars16Text = 0xB8,
    UnicodeChars16TextWithEndElement = 0xB9,
    UnicodeChars32Text = 0xBA,
    UnicodeChars32TextWithEndElement = 0xBB,
    QNameDictionaryText = 0xBC,
    QNameDictionaryTextWithEndElement = 0xBD,
    /// A byte this crate does not recognize as any defined record type.
    Unknown(u8),
}

impl RecordType {
    /// Returns the on-wire byte for this record type.
    pub fn code(self) -> u8 {
        use RecordType::*;
        match self {
            EndElement => 0x01,
            Comment => 0x02,
            Array => 0x03,
            ShortAttribute => 0x04,
            Attribute => 0x05,
            ShortDictionaryAttribute => 0x06,
            DictionaryAttribute => 0x07,
            ShortXmlnsAttribute => 0x08,
            XmlnsAttribute => 0x09,
            ShortDictionaryXmlnsAttribute => 0x0A,
            DictionaryXmlnsAttribute => 0x0B,
            PrefixDictionaryAttributeA => 0x0C,
            PrefixDictionaryAttributeB => 0x0D,
            PrefixDictionaryAttributeC => 0x0E,
            PrefixDictionaryAttributeD => 0x0F,
            PrefixDictionaryAttributeE => 0x10,
            PrefixDictionaryAttributeF => 0x11,
            PrefixDictionaryAttributeG => 0x12,
            PrefixDictionaryAttributeH => 0x13,
            PrefixDictionaryAttributeI => 0x14,
            PrefixDictionaryAttributeJ => 0x15,
            PrefixDictionaryAttributeK => 0x16,
            PrefixDictionaryAttributeL => 0x17,
            PrefixDictionaryAttributeM => 0x18,
            PrefixDictionaryAttributeN => 0x19,
            PrefixDictionaryAttributeO => 0x1A,
            PrefixDictionaryAttributeP => 0x1B,
            PrefixDictionaryAttributeQ => 0x1C,
            PrefixDictionaryAttributeR => 0x1D,
            PrefixDictionaryAttributeS => 0x1E,
            PrefixDictionaryAttributeT => 0x1F,
            PrefixDictionaryAttributeU => 0x20,
            PrefixDictionaryAttributeV => 0x21,
            PrefixDictionaryAttributeW => 0x22,
            PrefixDictionaryAttributeX => 0x23,
            PrefixDictionaryAttributeY => 0x24,
            PrefixDictionaryAttributeZ => 0x25,
            PrefixAttributeA => 0x26,
            PrefixAttributeB => 0x27,
            PrefixAttributeC => 0x28,
            PrefixAttributeD => 0x29,
            PrefixAttributeE => 0x2A,
            PrefixAttributeF => 0x2B,
            PrefixAttributeG => 0x2C,
            PrefixAttributeH => 0x2D,
            PrefixAttributeI => 0x2E,
            PrefixAttributeJ => 0x2F,
            PrefixAttributeK => 0x30,
            PrefixAttributeL => 0x31,
            PrefixAttributeM => 0x32,
            PrefixAttributeN => 0x33,
            PrefixAttributeO => 0x34,
            PrefixAttributeP => 0x35,
            PrefixAttributeQ => 0x36,
            PrefixAttributeR => 0x37,
            PrefixAttributeS => 0x38,
            PrefixAttributeT => 0x39,
            PrefixAttributeU => 0x3A,
            PrefixAttributeV => 0x3B,
            PrefixAttributeW => 0x3C,
            PrefixAttributeX => 0x3D,
            PrefixAttributeY => 0x3E,
            PrefixAttributeZ => 0x3F,
            ShortElement => 0x40,
            Element => 0x41,
            ShortDictionaryElement => 0x42,
            DictionaryElement => 0x43,
            PrefixDictionaryElementA => 0x44,
            PrefixDictionaryElementB => 0x45,
            PrefixDictionaryElementC => 0x46,
            PrefixDictionaryElementD => 0x47,
            PrefixDictionaryElementE => 0x48,
            PrefixDictionaryElementF => 0x49,
            PrefixDictionaryElementG => 0x4A,
            PrefixDictionaryElementH => 0x4B,
            PrefixDictionaryElementI => 0x4C,
            PrefixDictionaryElementJ => 0x4D,
            PrefixDictionaryElementK => 0x4E,
            PrefixDictionaryElementL => 0x4F,
            PrefixDictionaryElementM => 0x50,
            PrefixDictionaryElementN => 0x51,
            PrefixDictionaryElementO => 0x52,
            PrefixDictionaryElementP => 0x53,
            PrefixDictionaryElementQ => 0x54,
            PrefixDictionaryElementR => 0x55,
            PrefixDictionaryElementS => 0x56,
            PrefixDictionaryElementT => 0x57,
            PrefixDictionaryElementU => 0x58,
            PrefixDictionaryElementV => 0x59,
            PrefixDictionaryElementW => 0x5A,
            PrefixDictionaryElementX => 0x5B,
            PrefixDictionaryElementY => 0x5C,
            PrefixDictionaryElementZ => 0x5D,
            PrefixElementA => 0x5E,
            PrefixElementB => 0x5F,
            PrefixElementC => 0x60,
            PrefixElementD => 0x61,
            PrefixElementE => 0x62,
            PrefixElementF => 0x63,
            PrefixElementG => 0x64,
            PrefixElementH => 0x65,
            PrefixElementI => 0x66,
            PrefixElementJ => 0x67,
            PrefixElementK => 0x68,
            PrefixElementL => 0x69,
            PrefixElementM => 0x6A,
            PrefixElementN => 0x6B,
            PrefixElementO => 0x6C,
            PrefixElementP => 0x6D,
            PrefixElementQ => 0x6E,
            PrefixElementR => 0x6F,
            PrefixElementS => 0x70,
            PrefixElementT => 0x71,
            PrefixElementU => 0x72,
            PrefixElementV => 0x73,
            PrefixElementW => 0x74,
            PrefixElementX => 0x75,
            PrefixElementY => 0x76,
            PrefixElementZ => 0x77,
            ZeroText => 0x80,
            ZeroTextWithEndElement => 0x81,
            OneText => 0x82,
            OneTextWithEndElement => 0x83,
            FalseText => 0x84,
            FalseTextWithEndElement => 0x85,
            TrueText => 0x86,
            TrueTextWithEndElement => 0x87,
            Int8Text => 0x88,
            Int8TextWithEndElement => 0x89,
            Int16Text => 0x8A,
            Int16TextWithEndElement => 0x8B,
            Int32Text => 0x8C,
            Int32TextWithEndElement => 0x8D,
            Int64Text => 0x8E,
            Int64TextWithEndElement => 0x8F,
            FloatText => 0x90,
            FloatTextWithEndElement => 0x91,
            DoubleText => 0x92,
            DoubleTextWithEndElement => 0x93,
            DecimalText => 0x94,
            DecimalTextWithEndElement => 0x95,
            DateTimeText => 0x96,
            DateTimeTextWithEndElement => 0x97,
            Chars8Text => 0x98,
            Chars8TextWithEndElement => 0x99,
            Chars16Text => 0x9A,
            Chars16TextWithEndElement => 0x9B,
            Chars32Text => 0x9C,
            Chars32TextWithEndElement => 0x9D,
            Bytes8Text => 0x9E,
            Bytes8TextWithEndElement => 0x9F,
            Bytes16Text => 0xA0,
            Bytes16TextWithEndElement => 0xA1,
            Bytes32Text => 0xA2,
            Bytes32TextWithEndElement => 0xA3,
            StartListText => 0xA4,
            EndListText => 0xA6,
            EmptyText => 0xA8,
            EmptyTextWithEndElement => 0xA9,
            DictionaryText => 0xAA,
            DictionaryTextWithEndElement => 0xAB,
            UniqueIdText => 0xAC,
            UniqueIdTextWithEndElement => 0xAD,
            TimeSpanText => 0xAE,
            TimeSpanTextWithEndElement => 0xAF,
            UuidText => 0xB0,
            UuidTextWithEndElement => 0xB1,
            UInt64Text => 0xB2,
            UInt64TextWithEndElement => 0xB3,
            BoolText => 0xB4,
            BoolTextWithEndElement => 0xB5,
            UnicodeChars8Text => 0xB6,
            UnicodeChars8TextWithEndElement => 0xB7,
            UnicodeChars16Text => 0xB8,
            UnicodeChars16TextWithEndElement => 0xB9,
            UnicodeChars32Text => 0xBA,
            UnicodeChars32TextWithEndElement => 0xBB,
            QNameDictionaryText => 0xBC,
            QNameDictionaryTextWithEndElement => 0xBD,
            Unknown(b) => b,
        }
    }

    /// `true` for the element record-type range (`0x40..=0x77`).
    pub fn is_element(self) -> bool {
        matches!(self.code(), 0x40..=0x77)
    }

    /// `true` for the attribute record-type range (`0x04..=0x3F`).
    pub fn is_attribute(self) -> bool {
        matches!(self.code(), 0x04..=0x3F)
    }

    /// `true` for the text-record range (`0x80..=0xBD`).
    pub fn is_text_record(self) -> bool {
        matches!(self.code(), 0x80..=0xBD)
    }

    /// For a text record, whether its low bit marks "implicitly followed by
    /// an `EndElement`".
    pub fn has_implicit_end_element(self) -> bool {
        self.is_text_record() && self.code() & 1 == 1
    }

    /// The canonical (without-end-element) code for a text record, stripping
    /// the implicit-end bit.
    pub fn canonical_text_code(self) -> u8 {
        self.code() & !1
    }

    /// For a lettered `PrefixElement{A..Z}` record, the prefix letter it
    /// encodes.
    pub fn element_prefix_letter(self) -> Option<char> {
        match self.code() {
            c @ 0x5E..=0x77 => Some((b'a' + (c - 0x5E)) as char),
            _ => None,
        }
    }

    /// For a lettered `PrefixDictionaryElement{A..Z}` record, the prefix
    /// letter it encodes.
    pub fn dictionary_element_prefix_letter(self) -> Option<char> {
        match self.code() {
            c @ 0x44..=0x5D => Some((b'a' + (c - 0x44)) as char),
            _ => None,
        }
    }

    /// For a lettered `PrefixAttribute{A..Z}` record, the prefix letter it
    /// encodes.
    pub fn attribute_prefix_letter(self) -> Option<char> {
        match self.code() {
            c @ 0x26..=0x3F => Some((b'a' + (c - 0x26)) as char),
            _ => None,
        }
    }

    /// For a lettered `PrefixDictionaryAttribute{A..Z}` record, the prefix
    /// letter it encodes.
    pub fn dictionary_attribute_prefix_letter(self) -> Option<char> {
        match self.code() {
            c @ 0x0C..=0x25 => Some((b'a' + (c - 0x0C)) as char),
            _ => None,
        }
    }

    /// Builds the lettered `PrefixElement{X}` variant for `letter`.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not an ASCII lowercase letter.
    pub fn prefix_element(letter: char) -> RecordType {
        assert!(letter.is_ascii_lowercase(), "prefix letter must be a..z");
        RecordType::from_u8(0x5E + (letter as u8 - b'a'))
    }

    /// Builds the lettered `PrefixAttribute{X}` variant for `letter`.
    ///
    /// # Panics
    ///
    /// Panics if `letter` is not an ASCII lowercase letter.
    pub fn prefix_attribute(letter: char) -> RecordType {
        assert!(letter.is_ascii_lowercase(), "prefix letter must be a..z");
        RecordType::from_u8(0x26 + (letter as u8 - b'a'))
    }

    /// Reconstructs a `RecordType` from its on-wire byte, using
    /// [`RecordType::Unknown`] for bytes with no defined meaning.
    pub fn from_u8(byte: u8) -> RecordType {
        RecordType::from(byte)
    }
}

impl From<u8> for RecordType {
    fn from(byte: u8) -> RecordType {
        use RecordType::*;
        match byte {
            0x01 => EndElement,
            0x02 => Comment,
            0x03 => Array,
            0x04 => ShortAttribute,
            0x05 => Attribute,
            0x06 => ShortDictionaryAttribute,
            0x07 => DictionaryAttribute,
            0x08 => ShortXmlnsAttribute,
            0x09 => XmlnsAttribute,
            0x0A => ShortDictionaryXmlnsAttribute,
            0x0B => DictionaryXmlnsAttribute,
            0x0C => PrefixDictionaryAttributeA,
            0x0D => PrefixDictionaryAttributeB,
            0x0E => PrefixDictionaryAttributeC,
            0x0F => PrefixDictionaryAttributeD,
            0x10 => PrefixDictionaryAttributeE,
            0x11 => PrefixDictionaryAttributeF,
            0x12 => PrefixDictionaryAttributeG,
            0x13 => PrefixDictionaryAttributeH,
            0x14 => PrefixDictionaryAttributeI,
            0x15 => PrefixDictionaryAttributeJ,
            0x16 => PrefixDictionaryAttributeK,
            0x17 => PrefixDictionaryAttributeL,
            0x18 => PrefixDictionaryAttributeM,
            0x19 => PrefixDictionaryAttributeN,
            0x1A => PrefixDictionaryAttributeO,
            0x1B => PrefixDictionaryAttributeP,
            0x1C => PrefixDictionaryAttributeQ,
            0x1D => PrefixDictionaryAttributeR,
            0x1E => PrefixDictionaryAttributeS,
            0x1F => PrefixDictionaryAttributeT,
            0x20 => PrefixDictionaryAttributeU,
            0x21 => PrefixDictionaryAttributeV,
            0x22 => PrefixDictionaryAttributeW,
            0x23 => PrefixDictionaryAttributeX,
            0x24 => PrefixDictionaryAttributeY,
            0x25 => PrefixDictionaryAttributeZ,
            0x26 => PrefixAttributeA,
            0x27 => PrefixAttributeB,
            0x28 => PrefixAttributeC,
            0x29 => PrefixAttributeD,
            0x2A => PrefixAttributeE,
            0x2B => PrefixAttributeF,
            0x2C => PrefixAttributeG,
            0x2D => PrefixAttributeH,
            0x2E => PrefixAttributeI,
            0x2F => PrefixAttributeJ,
            0x30 => PrefixAttributeK,
            0x31 => PrefixAttributeL,
            0x32 => PrefixAttributeM,
            0x33 => PrefixAttributeN,
            0x34 => PrefixAttributeO,
            0x35 => PrefixAttributeP,
            0x36 => PrefixAttributeQ,
            0x37 => PrefixAttributeR,
            0x38 => PrefixAttributeS,
            0x39 => PrefixAttributeT,
            0x3A => PrefixAttributeU,
            0x3B => PrefixAttributeV,
            0x3C => PrefixAttributeW,
            0x3D => PrefixAttributeX,
            0x3E => PrefixAttributeY,
            0x3F => PrefixAttributeZ,
            0x40 => ShortElement,
            0x41 => Element,
            0x42 => ShortDictionaryElement,
            0x43 => DictionaryElement,
            0x44 => PrefixDictionaryElementA,
            0x45 => PrefixDictionaryElementB,
            0x46 => PrefixDictionaryElementC,
            0x47 => PrefixDictionaryElementD,
            0x48 => PrefixDictionaryElementE,
            0x49 => PrefixDictionaryElementF,
            0x4A => PrefixDictionaryElementG,
            0x4B => PrefixDictionaryElementH,
            0x4C => PrefixDictionaryElementI,
            0x4D => PrefixDictionaryElementJ,
            0x4E => PrefixDictionaryElementK,
            0x4F => PrefixDictionaryElementL,
            0x50 => PrefixDictionaryElementM,
            0x51 => PrefixDictionaryElementN,
            0x52 => PrefixDictionaryElementO,
            0x53 => PrefixDictionaryElementP,
            0x54 => PrefixDictionaryElementQ,
            0x55 => PrefixDictionaryElementR,
            0x56 => PrefixDictionaryElementS,
            0x57 => PrefixDictionaryElementT,
            0x58 => PrefixDictionaryElementU,
            0x59 => PrefixDictionaryElementV,
            0x5A => PrefixDictionaryElementW,
            0x5B => PrefixDictionaryElementX,
            0x5C => PrefixDictionaryElementY,
            0x5D => PrefixDictionaryElementZ,
            0x5E => PrefixElementA,
            0x5F => PrefixElementB,
            0x60 => PrefixElementC,
            0x61 => PrefixElementD,
            0x62 => PrefixElementE,
            0x63 => PrefixElementF,
            0x64 => PrefixElementG,
            0x65 => PrefixElementH,
            0x66 => PrefixElementI,
            0x67 => PrefixElementJ,
            0x68 => PrefixElementK,
            0x69 => PrefixElementL,
            0x6A => PrefixElementM,
            0x6B => PrefixElementN,
            0x6C => PrefixElementO,
            0x6D => PrefixElementP,
            0x6E => PrefixElementQ,
            0x6F => PrefixElementR,
            0x70 => PrefixElementS,
            0x71 => PrefixElementT,
            0x72 => PrefixElementU,
            0x73 => PrefixElementV,
            0x74 => PrefixElementW,
            0x75 => PrefixElementX,
            0x76 => PrefixElementY,
            0x77 => PrefixElementZ,
            0x80 => ZeroText,
            0x81 => ZeroTextWithEndElement,
            0x82 => OneText,
            0x83 => OneTextWithEndElement,
            0x84 => FalseText,
            0x85 => FalseTextWithEndElement,
            0x86 => TrueText,
            0x87 => TrueTextWithEndElement,
            0x88 => Int8Text,
            0x89 => Int8TextWithEndElement,
            0x8A => Int16Text,
            0x8B => Int16TextWithEndElement,
            0x8C => Int32Text,
            0x8D => Int32TextWithEndElement,
            0x8E => Int64Text,
            0x8F => Int64TextWithEndElement,
            0x90 => FloatText,
            0x91 => FloatTextWithEndElement,
            0x92 => DoubleText,
            0x93 => DoubleTextWithEndElement,
            0x94 => DecimalText,
            0x95 => DecimalTextWithEndElement,
            0x96 => DateTimeText,
            0x97 => DateTimeTextWithEndElement,
            0x98 => Chars8Text,
            0x99 => Chars8TextWithEndElement,
            0x9A => Chars16Text,
            0x9B => Chars16TextWithEndElement,
            0x9C => Chars32Text,
            0x9D => Chars32TextWithEndElement,
            0x9E => Bytes8Text,
            0x9F => Bytes8TextWithEndElement,
            0xA0 => Bytes16Text,
            0xA1 => Bytes16TextWithEndElement,
            0xA2 => Bytes32Text,
            0xA3 => Bytes32TextWithEndElement,
            0xA4 => StartListText,
            0xA6 => EndListText,
            0xA8 => EmptyText,
            0xA9 => EmptyTextWithEndElement,
            0xAA => DictionaryText,
            0xAB => DictionaryTextWithEndElement,
            0xAC => UniqueIdText,
            0xAD => UniqueIdTextWithEndElement,
            0xAE => TimeSpanText,
            0xAF => TimeSpanTextWithEndElement,
            0xB0 => UuidText,
            0xB1 => UuidTextWithEndElement,
            0xB2 => UInt64Text,
            0xB3 => UInt64TextWithEndElement,
            0xB4 => BoolText,
            0xB5 => BoolTextWithEndElement,
            0xB6 => UnicodeChars8Text,
            0xB7 => UnicodeChars8TextWithEndElement,
            0xB8 => UnicodeChars16Text,
            0xB9 => UnicodeChars16TextWithEndElement,
            0xBA => UnicodeChars32Text,
            0xBB => UnicodeChars32TextWithEndElement,
            0xBC => QNameDictionaryText,
            0xBD => QNameDictionaryTextWithEndElement,
            other => Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_the_table() {
        assert!(RecordType::ShortElement.is_element());
        assert!(RecordType::PrefixElementZ.is_element());
        assert!(!RecordType::EndElement.is_element());

        assert!(RecordType::ShortAttribute.is_attribute());
        assert!(RecordType::PrefixAttributeZ.is_attribute());
        assert!(!RecordType::ShortElement.is_attribute());

        assert!(RecordType::ZeroText.is_text_record());
        assert!(RecordType::QNameDictionaryTextWithEndElement.is_text_record());
        assert!(!RecordType::EndElement.is_text_record());
    }

    #[test]
    fn prefix_letter_offsets_round_trip() {
        for letter in 'a'..='z' {
            let rt = RecordType::prefix_element(letter);
            assert_eq!(rt.element_prefix_letter(), Some(letter));
            let rt = RecordType::prefix_attribute(letter);
            assert_eq!(rt.attribute_prefix_letter(), Some(letter));
        }
        assert_eq!(RecordType::PrefixElementA.code(), 0x5E);
        assert_eq!(RecordType::PrefixElementS.code(), 0x70);
        assert_eq!(RecordType::PrefixAttributeA.code(), 0x26);
    }

    #[test]
    fn with_end_element_bit() {
        assert!(!RecordType::Chars8Text.has_implicit_end_element());
        assert!(RecordType::Chars8TextWithEndElement.has_implicit_end_element());
        assert_eq!(
            RecordType::Chars8TextWithEndElement.canonical_text_code(),
            RecordType::Chars8Text.code()
        );
    }

    #[test]
    fn unknown_byte_round_trips() {
        assert_eq!(RecordType::from_u8(0x00), RecordType::Unknown(0x00));
        assert_eq!(RecordType::from_u8(0xFE), RecordType::Unknown(0xFE));
        assert_eq!(RecordType::Unknown(0x00).code(), 0x00);
    }
}
