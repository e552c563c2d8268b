use crate::dict::PronunciationDict;

/// Small CMU-format dictionary covering both diversity levels.
pub(crate) const FIXTURE: &str = "\
;;; fixture for cumber-core tests
batch B AE1 CH
batch(2) B AE1 T SH
precaution P R IY0 K AO1 SH AH0 N
volunteer V AA2 L AH0 N T IH1 R
bandicoot B AE1 N D IH0 K UW2 T
bandicoots' B AE1 N D IH0 K UW2 T S
barrister B AE1 R IH0 S T ER0
barrister's B AE1 R IH0 S T ER0 Z
benedict B EH1 N AH0 D IH2 K T
cumberbatch K AH1 M B ER0 B AE2 CH
callahan K AE1 L AH0 HH AE0 N
countryman K AH1 N T R IY0 M AE2 N
elephant EH1 L AH0 F AH0 N T
engineer EH2 N JH AH0 N IH1 R
referee R EH2 F ER0 IY1
cat K AE1 T
the DH AH0
hmm HH M
";

pub(crate) fn fixture_dict() -> PronunciationDict {
    PronunciationDict::from_text(FIXTURE).expect("fixture must parse")
}
