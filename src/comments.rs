//! 分類対象コメントの読み込み
//!
//! - `.json`: 文字列のJSON配列
//! - それ以外: 1行1コメント（空行は無視）
//! - ファイル未指定: 組み込みのサンプルコメント

use crate::error::{FeedbackAiError, Result};
use std::path::Path;

/// 組み込みのサンプルコメント
pub const SAMPLE_COMMENTS: &[&str] = &[
    "The lectures were fantastic and really kept my attention.",
    "I felt completely lost during the second half of the semester.",
    "The workload was way too heavy for an introductory course.",
    "It was okay, but I wish the slides were posted online sooner.",
    "The group project was a nightmare because my partners didn't do anything.",
    "Best professor I've had so far, very understanding and kind.",
    "Please stop reading directly off the PowerPoint slides.",
    "I really appreciated the detailed feedback on my essay.",
    "The textbook was incredibly expensive and we barely opened it.",
    "Solid class, I learned exactly what I expected to.",
    "The exam questions had nothing to do with what we covered in class.",
    "I loved the guest speakers, they brought a cool perspective.",
    "The room is always freezing cold, which makes it hard to focus.",
    "Grading takes way too long, I didn't know my standing until the final week.",
    "The content is fascinating, but the 8:00 AM slot is brutal.",
    "I think the prerequisites for this course need to be updated.",
    "The TAs were actually more helpful than the main lectures.",
    "Easy A if you just show up and turn things in on time.",
    "The syllabus was confusing and dates kept changing without notice.",
    "I would definitely take another class with this instructor.",
    "The labs were fun, but the equipment is really outdated.",
    "I didn't feel like my grade reflected the effort I put in.",
    "Great course, but there was too much required reading.",
    "The pacing was weird; we rushed through the most important topics at the end.",
    "I usually hate this subject, but this class made it bearable.",
    "The instructions for the final project were extremely vague.",
    "Nothing special, just a standard requirement filler.",
    "I really liked how the course connected theory to real-world events.",
    "Please offer more office hours, the current times conflict with other classes.",
    "I felt very supported throughout the entire term.",
    "The recorded lectures saved my life when I got sick, thank you for providing them.",
    "I still don't understand the grading criteria for the final paper.",
    "This course changed my career path, I absolutely loved it.",
    "The classroom was too small for the number of students enrolled.",
    "Please provide more examples when explaining the math concepts.",
    "I felt like the professor was condescending when answering questions.",
    "The textbook was actually really helpful and easy to read.",
    "Assignments were spaced out well so I never felt overwhelmed.",
    "I wish we had more opportunities for class discussion instead of just listening.",
    "The final exam was fair and covered exactly what was on the study guide.",
    "It felt like two different courses mashed into one.",
    "I would not recommend this class to anyone who isn't a major.",
    "The instructor's enthusiasm made 8 AM lectures worth waking up for.",
    "There was way too much homework for a 2-credit class.",
    "I liked the material, but the disorganized Moodle page made it hard to find things.",
    "The peer review sessions were a waste of time because nobody took them seriously.",
    "Great refresher on the basics, but I was hoping for more advanced topics.",
    "The professor needs to learn how to use the microphone properly.",
    "I appreciated the flexibility with deadlines.",
    "The quizzes were tricky, but they forced me to actually do the reading.",
    "I felt like a number in this class, not a student.",
    "The TA was harsh and graded totally differently than the professor.",
    "Honestly, this was the easiest A I’ve ever gotten.",
    "The software we had to use was buggy and frustrated everyone.",
    "I loved the variety of media used in the lectures, like the videos and podcasts.",
    "The syllabus said one thing, but we did something completely different.",
    "Please post the slides before class so we can take notes on them.",
    "I really struggled with the pace of this course.",
    "The feedback on my assignments was generic and didn't help me improve.",
    "This class gave me practical skills I can actually put on my resume.",
    "The professor cancelled class way too often.",
    "I wish the attendance policy wasn't so strict.",
    "The midterm was brutal, but the curve saved me.",
    "I enjoyed the group work more than I thought I would.",
    "The lectures were repetitive and could have been summarized in an email.",
    "I didn't learn much new information, but it was a good review.",
    "The professor was very accessible and helpful during office hours.",
    "I hate that we had to pay extra for the online homework platform.",
    "The connection between the lectures and the lab work was seamless.",
    "I felt unprepared for the final based on the homework assignments.",
    "This was a waste of tuition money.",
    "The guest lecturer in week 5 was the highlight of the semester.",
    "I think the course description needs to be updated to match what we actually did.",
    "Very organized and well-structured course.",
    "I was intimidated at first, but the supportive environment helped me succeed.",
];

pub fn sample_comments() -> Vec<String> {
    SAMPLE_COMMENTS.iter().map(|s| s.to_string()).collect()
}

/// コメントを読み込む。`path` がNoneならサンプルを返す
pub fn load_comments(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(sample_comments());
    };

    if !path.exists() {
        return Err(FeedbackAiError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        let comments: Vec<String> = serde_json::from_str(&content)?;
        return Ok(comments);
    }

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}
