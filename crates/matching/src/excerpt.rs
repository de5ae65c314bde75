use crate::query::Query;
use crate::text::{contains_ignore_ascii_case, find_ignore_ascii_case};

/// Characters kept on each side of the matched word before widening to a space.
pub const EXCERPT_RADIUS: usize = 25;

/// Marker added where an excerpt was cut short.
pub const ELLIPSIS: &str = "...";

/// Cut a short snippet of `text` around the first word of `query`.
///
/// Only the first sentence that contains the word is considered. Returns an
/// empty string when the query has no words or no sentence contains the first
/// one.
pub fn matching_excerpt(query: &str, text: &str) -> String {
    excerpt(&Query::parse(query), text)
}

pub(crate) fn excerpt(query: &Query, text: &str) -> String {
    let Some(word) = query.first_word() else {
        return String::new();
    };

    let Some(sentence) = sentences(text).find(|sentence| contains_ignore_ascii_case(sentence, word))
    else {
        return String::new();
    };
    let Some(position) = find_ignore_ascii_case(sentence, word) else {
        return String::new();
    };

    let start = widen_left(sentence, chars_before(sentence, position, EXCERPT_RADIUS));
    let end = widen_right(
        sentence,
        chars_after(sentence, position + word.len(), EXCERPT_RADIUS),
    );

    let mut excerpt = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(&sentence[start..end]);
    if end < sentence.len() {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Sentences of `text`, split on `.` or `;` followed by whitespace. The
/// delimiter and the whitespace after it belong to neither sentence.
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match sentence_break(current) {
            Some((end, next)) => {
                rest = Some(&current[next..]);
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Byte range of the first sentence delimiter: where the sentence ends and
/// where the next one begins.
fn sentence_break(text: &str) -> Option<(usize, usize)> {
    let mut chars = text.char_indices().peekable();
    while let Some((index, c)) = chars.next() {
        if c != '.' && c != ';' {
            continue;
        }
        let mut next = index + c.len_utf8();
        let mut saw_space = false;
        while let Some(&(offset, following)) = chars.peek() {
            if !following.is_whitespace() {
                break;
            }
            saw_space = true;
            next = offset + following.len_utf8();
            chars.next();
        }
        if saw_space {
            return Some((index, next));
        }
    }
    None
}

fn chars_before(text: &str, from: usize, count: usize) -> usize {
    if count == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(index, _)| index)
}

fn chars_after(text: &str, from: usize, count: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(count)
        .map_or(text.len(), |(index, _)| from + index)
}

/// Move `start` back to just after the nearest preceding space, or to the start
/// of the sentence when there is none.
fn widen_left(sentence: &str, start: usize) -> usize {
    if start == 0 {
        return 0;
    }
    sentence[..start].rfind(' ').map_or(0, |space| space + 1)
}

/// Move `end` forward to the nearest following space, or to the end of the
/// sentence when there is none.
fn widen_right(sentence: &str, end: usize) -> usize {
    if end >= sentence.len() {
        return sentence.len();
    }
    sentence[end..]
        .find(' ')
        .map_or(sentence.len(), |space| end + space)
}
