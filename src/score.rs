/// On-screen score text, rebuilt only when the score changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLabel {
    score: u32,
    text: String,
}

impl ScoreLabel {
    pub fn new(score: u32) -> Self {
        ScoreLabel {
            score,
            text: format_score(score),
        }
    }

    /// Bring the text in line with `score`. Returns true if the text was rebuilt.
    pub fn sync(&mut self, score: u32) -> bool {
        if score == self.score {
            return false;
        }
        self.score = score;
        self.text = format_score(score);
        true
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

fn format_score(score: u32) -> String {
    format!("Score: {}", score)
}
