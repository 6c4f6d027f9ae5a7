use dbdcare_model::quiz::QuizQuestion;

/// Every stored question offers exactly this many options.
pub const OPTION_COUNT: usize = 2;

/// Pads or truncates the options and clamps the correct index into range.
#[must_use]
pub fn normalize_question(mut question: QuizQuestion) -> QuizQuestion {
    question.options.resize(OPTION_COUNT, String::new());
    if !(0..OPTION_COUNT as i32).contains(&question.correct_answer) {
        question.correct_answer = 0;
    }
    question
}

#[must_use]
pub fn default_questions() -> Vec<QuizQuestion> {
    let question = |question: &str, options: [&str; OPTION_COUNT], correct_answer: i32, explanation: &str| QuizQuestion {
        question: question.to_owned(),
        options: options.into_iter().map(str::to_owned).collect(),
        correct_answer,
        explanation: explanation.to_owned(),
    };
    vec![
        question(
            "Nyamuk apa yang menularkan penyakit DBD?",
            ["Aedes aegypti", "Anopheles"],
            0,
            "DBD ditularkan melalui gigitan nyamuk Aedes aegypti yang membawa virus dengue.",
        ),
        question(
            "Kapan nyamuk Aedes aegypti paling aktif menggigit?",
            ["Tengah malam", "Pagi dan sore hari"],
            1,
            "Aedes aegypti aktif menggigit pada pagi hingga sore hari.",
        ),
        question(
            "Di mana nyamuk Aedes aegypti berkembang biak?",
            ["Air bersih yang tergenang", "Air got yang kotor"],
            0,
            "Jentik Aedes aegypti hidup di air bersih yang tergenang seperti bak mandi dan vas bunga.",
        ),
        question(
            "Apa kepanjangan dari 3M dalam 3M Plus?",
            ["Menguras, Menutup, Mendaur ulang", "Mencuci, Menyapu, Mengepel"],
            0,
            "3M berarti menguras dan menutup tempat penampungan air serta mendaur ulang barang bekas.",
        ),
        question(
            "Seberapa sering bak mandi sebaiknya dikuras?",
            ["Sebulan sekali", "Seminggu sekali"],
            1,
            "Telur nyamuk menetas menjadi nyamuk dewasa dalam sekitar satu minggu.",
        ),
        question(
            "Gejala awal DBD yang paling umum adalah?",
            ["Demam tinggi mendadak", "Batuk berdahak"],
            0,
            "DBD biasanya diawali demam tinggi mendadak selama 2 sampai 7 hari.",
        ),
        question(
            "Kapan fase kritis DBD biasanya terjadi?",
            ["Hari pertama demam", "Saat demam mulai turun"],
            1,
            "Fase kritis terjadi sekitar hari ke-3 sampai ke-5 ketika demam turun.",
        ),
        question(
            "Apa yang penting dilakukan saat merawat penderita DBD di rumah?",
            ["Memberi banyak cairan", "Membatasi minum"],
            0,
            "Cairan yang cukup membantu mencegah dehidrasi dan syok.",
        ),
        question(
            "Apa contoh tindakan \"Plus\" dalam 3M Plus?",
            ["Menaburkan bubuk abate", "Membuka jendela di malam hari"],
            0,
            "Abate membunuh jentik di tempat air yang sulit dikuras.",
        ),
        question(
            "Apakah fogging saja cukup untuk mencegah DBD?",
            ["Ya, fogging sudah cukup", "Tidak, fogging hanya membunuh nyamuk dewasa"],
            1,
            "Fogging tidak membunuh jentik, sehingga PSN 3M Plus tetap diperlukan.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(options: &[&str], correct_answer: i32) -> QuizQuestion {
        QuizQuestion {
            question: "Q".to_owned(),
            options: options.iter().map(|option| (*option).to_owned()).collect(),
            correct_answer,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_normalize_pads_and_truncates() {
        assert_eq!(normalize_question(raw(&["A"], 0)).options, vec!["A", ""]);
        assert_eq!(normalize_question(raw(&[], 0)).options, vec!["", ""]);
        assert_eq!(normalize_question(raw(&["A", "B", "C"], 1)).options, vec!["A", "B"]);
    }

    #[test]
    fn test_normalize_correct_answer() {
        assert_eq!(normalize_question(raw(&["A", "B"], 1)).correct_answer, 1);
        assert_eq!(normalize_question(raw(&["A", "B"], 2)).correct_answer, 0);
        assert_eq!(normalize_question(raw(&["A", "B"], -1)).correct_answer, 0);
    }

    #[test]
    fn test_defaults_are_normalized() {
        let questions = default_questions();
        assert_eq!(questions.len(), 10);
        for question in questions {
            assert_eq!(normalize_question(question.clone()), question);
        }
    }
}
