//! Canned meeting copy used by the generator, one table per locale.

use crate::models::{Locale, Priority};

/// Which computed deadline an action row uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Deadline {
    /// `today + deadline_days`
    Primary,
    /// `today + max(1, deadline_days - 3)`
    Secondary,
}

pub(crate) struct ActionRow {
    pub task: &'static str,
    pub owner: &'static str,
    pub deadline: Deadline,
    pub priority: Priority,
}

/// All fixed strings for one locale.
pub(crate) struct MeetingCopy {
    pub summary_heading: &'static str,
    pub summary_bullets: [&'static str; 3],
    pub decisions_heading: &'static str,
    pub decision_bullets: [&'static str; 3],
    pub rows: [ActionRow; 3],
    pub no_input: &'static str,
    pub email_heading: &'static str,
    pub email_subject: &'static str,
    pub email_greeting: [&'static str; 2],
    pub email_summary_heading: &'static str,
    pub email_decisions_heading: &'static str,
    pub email_actions_heading: &'static str,
    pub email_closing: &'static str,
}

static EN: MeetingCopy = MeetingCopy {
    summary_heading: "### Meeting Summary",
    summary_bullets: [
        "Feature A needs wireframes",
        "Competitor B research in progress",
        "First review meeting during next week",
    ],
    decisions_heading: "### Decisions",
    decision_bullets: [
        "Share the wireframe draft within one week",
        "Collect one competitor research report",
        "Engineering technical review before the next meeting",
    ],
    rows: [
        ActionRow {
            task: "Wireframe production",
            owner: "Designer Kim",
            deadline: Deadline::Primary,
            priority: Priority::High,
        },
        ActionRow {
            task: "Competitor research",
            owner: "PM Lee",
            deadline: Deadline::Secondary,
            priority: Priority::Medium,
        },
        ActionRow {
            task: "Technical review prep",
            owner: "Dev team",
            deadline: Deadline::Primary,
            priority: Priority::Medium,
        },
    ],
    no_input: "(no input provided)",
    email_heading: "# Email Draft",
    email_subject: "# [Meeting Summary] Feature A / Weekly Sync",
    email_greeting: ["Hi team,", "Below are the summary and action items from today's meeting."],
    email_summary_heading: "## Summary",
    email_decisions_heading: "## Decisions",
    email_actions_heading: "## Action Items",
    email_closing: "Thanks.",
};

static KO: MeetingCopy = MeetingCopy {
    summary_heading: "### 회의 요약",
    summary_bullets: [
        "신규 기능 A 와이어프레임 필요",
        "경쟁사 B 리서치 진행",
        "다음 주 중 1차 검토 미팅",
    ],
    decisions_heading: "### 결정 사항",
    decision_bullets: [
        "WF 시안 1주 내 공유",
        "경쟁사 리서치 1건 수집",
        "다음 회의 전 개발 기술 검토",
    ],
    rows: [
        ActionRow {
            task: "와이어프레임 제작",
            owner: "디자이너 김OO",
            deadline: Deadline::Primary,
            priority: Priority::High,
        },
        ActionRow {
            task: "경쟁사 리서치",
            owner: "PM 이OO",
            deadline: Deadline::Secondary,
            priority: Priority::Medium,
        },
        ActionRow {
            task: "기술 검토 미팅 준비",
            owner: "개발팀",
            deadline: Deadline::Primary,
            priority: Priority::Medium,
        },
    ],
    no_input: "(입력 없음)",
    email_heading: "# 메일 초안",
    email_subject: "# [회의 요약] 신규 기능 A / 주간 정기",
    email_greeting: ["안녕하세요 팀,", "아래는 오늘 회의 요약과 실행 항목입니다."],
    email_summary_heading: "## 요약",
    email_decisions_heading: "## 결정 사항",
    email_actions_heading: "## 실행 항목",
    email_closing: "감사합니다.",
};

impl MeetingCopy {
    pub(crate) fn for_locale(locale: Locale) -> &'static MeetingCopy {
        match locale {
            Locale::En => &EN,
            Locale::Ko => &KO,
        }
    }
}

/// Demo notes standing in for OCR output from a photo of handwritten notes.
pub const SAMPLE_NOTES: &str = "안건: 신규 기능 A 논의
- 발언자A: 와이어프레임 필요
- 발언자B: 경쟁사 B 리서치
결정: 다음 주까지 WF 시안, 리서치 1건
마감: WF(2주), 리서치(1주)";
