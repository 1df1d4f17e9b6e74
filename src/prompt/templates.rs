//! Genre-specific instruction templates.
//!
//! Placeholders: `{text}`, `{target_language}`, `{source_language}`, `{target_audience}`,
//! `{target_audience_instructions}`, `{additional_request}`.

const DAILY_TEMPLATE: &str = r#"
Translate the following everyday conversation into {target_language}. The source language is {source_language}.

**Translation guidelines:**

* Use natural, colloquial expressions and keep the flow and nuance of the conversation.
* Consider the relationship between the speakers (friends, family, colleagues) and the situation, and choose an appropriate tone and level of formality.
* Use slang or buzzwords where the context allows, or add a short explanation in parentheses.
* Keep roughly the length of the original; do not make it much longer or shorter.
* **Target audience:** {target_audience} ({target_audience_instructions})

**Additional request:** {additional_request}

**Original text:** {text}
"#;

const ARTICLE_TEMPLATE: &str = r#"
Translate the following article into {target_language}. The source language is {source_language}.

**Translation guidelines:**

1. Use current technical terminology accurately and add explanations in parentheses where needed.
2. Keep an objective, concise and precise journalistic tone. Avoid emotional expressions.
3. Consider the overall context so that the meaning of every sentence comes across clearly.
4. Use standard transliterations for place names, personal names and organisations, noting alternatives in parentheses.
5. Keep numbers, dates and currency units as in the original, adding information in parentheses where helpful.
* **Target audience:** {target_audience} ({target_audience_instructions})

**Additional request:** {additional_request}

**Original text:** {text}
"#;

const LEGAL_TEMPLATE: &str = r#"
Translate the following legal text into {target_language}. The source language is {source_language}.

**Translation guidelines:**

1. Use legal terminology consistently; when a different term is used, show the original term in parentheses.
2. Legal accuracy comes first; avoid vague or ambiguous wording.
3. Keep the formal, courteous tone of legal documents. Do not use informal expressions or abbreviations.
4. Preserve the sentence structure and logical flow of the original as far as possible.
* **Target audience:** {target_audience} ({target_audience_instructions})

**Additional request:** {additional_request}

**Original text:** {text}
"#;

const LITERATURE_TEMPLATE: &str = r#"
Translate the following literary text into {target_language}. The source language is {source_language}.

**Translation guidelines:**

1. Take the author's intent, the characters and the setting into account and translate in context.
2. Keep the style and tone of the original while producing natural, readable sentences.
3. Preserve the meaning and effect of figurative language such as metaphor and symbolism.
4. Focus on conveying the overall atmosphere and emotional impact of the work.
* **Target audience:** {target_audience} ({target_audience_instructions})

**Additional request:** {additional_request}

**Original text:** {text}
"#;

/// Text genre selecting which template a request is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Daily,
    Article,
    Legal,
    Literature,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Daily, Genre::Article, Genre::Legal, Genre::Literature];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "daily" => Some(Self::Daily),
            "article" => Some(Self::Article),
            "legal" => Some(Self::Legal),
            "literature" => Some(Self::Literature),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Article => "article",
            Self::Legal => "legal",
            Self::Literature => "literature",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            Self::Daily => DAILY_TEMPLATE,
            Self::Article => ARTICLE_TEMPLATE,
            Self::Legal => LEGAL_TEMPLATE,
            Self::Literature => LITERATURE_TEMPLATE,
        }
    }
}
