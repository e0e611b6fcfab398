use content_logging::content_debug;

use crate::extract::ContentExtractor;
use crate::records::{LetterCollection, LetterRecord, Recipient};

const FATHER_BODY: &str = "Your letter of the 7th was received night before last. I very cheerfully send you the twenty dollars, which sum you say is necessary to save your land from sale. It is singular that you should have forgotten a judgment against you; and it is more singular that the plaintiff should have let you forget it so long, particularly as I suppose you have always had property enough to satisfy a judgment of that amount. Before you pay it, it would be well to be sure you have not paid it; or, at least, that you cannot prove you have paid it. Give my love to Mother, and all the connections.";

const GRANT_BODY: &str = "Not expecting to see you again before the spring campaign opens, I wish to express, in this way, my entire satisfaction with what you have done up to this time, so far as I understand it. The particulars of your plans I neither know, or seek to know. You are vigilant and self reliant; and, pleased with this, I wish not to obtrude any constraints or restraints upon you. While I am very anxious that any great disaster, or the capture of our men in great numbers, shall be avoided, I know these points are less likely to escape your attention than they would be mine. If there is anything wanting which is within my power to give, do not fail to let me know it.

And now with a brave Army, and a just cause, may God sustain you.";

/// Lincoln letters collection.
///
/// The letters are fixed transcriptions. The fetched text only confirms the
/// source is reachable; it is not parsed.
// TODO: parse letters out of the Gutenberg text once the letter headings in pg8110 are mapped.
#[derive(Debug, Default, Clone, Copy)]
pub struct LettersExtractor;

impl ContentExtractor for LettersExtractor {
    type Record = LetterCollection;

    fn extract(&self, text: &str) -> Option<LetterCollection> {
        content_debug!(
            "letters source text has {} chars; using fixed transcriptions",
            text.chars().count()
        );
        Some(LetterCollection {
            title: "Lincoln Letters".to_string(),
            author: "Abraham Lincoln".to_string(),
            source: "Project Gutenberg (Public Domain)".to_string(),
            url: "https://www.gutenberg.org/ebooks/8110".to_string(),
            letters: vec![letter_to_father(), letter_to_grant()],
        })
    }
}

fn letter_to_father() -> LetterRecord {
    LetterRecord {
        date: "December 24, 1848".to_string(),
        place: "Washington".to_string(),
        recipient: Recipient {
            name: "Thomas Lincoln".to_string(),
            relation: Some("Father".to_string()),
            title: None,
        },
        salutation: "My dear father:".to_string(),
        body: FATHER_BODY.to_string(),
        closing: "Affectionately your son,".to_string(),
        signature: "A. Lincoln".to_string(),
    }
}

fn letter_to_grant() -> LetterRecord {
    LetterRecord {
        date: "April 30, 1864".to_string(),
        place: "Executive Mansion, Washington".to_string(),
        recipient: Recipient {
            name: "Lieutenant-General Grant".to_string(),
            relation: None,
            title: Some("Lieutenant-General".to_string()),
        },
        salutation: "Lieutenant-General Grant,".to_string(),
        body: GRANT_BODY.to_string(),
        closing: "Yours very truly,".to_string(),
        signature: "A. Lincoln".to_string(),
    }
}
