// 📦 Default Configuration - Built-in categories and keyword tables
// The nine-category set and the Korean/English keyword dictionary the
// classifier ships with. Callers with their own taxonomy build their own
// CategorySet / KeywordDictionary instead.

use crate::category::{Category, CategorySet};
use crate::dictionary::KeywordDictionary;

/// Fallback category id used by the built-in configuration
pub const FALLBACK_CATEGORY: &str = "miscellaneous";

// ============================================================================
// CATEGORY SET
// ============================================================================

/// The built-in spending categories with their display metadata
pub fn default_category_set() -> CategorySet {
    let categories = vec![
        Category::with_display("dining", "Dining", "식비", "restaurant", "#FF6B6B"),
        Category::with_display("essentials", "Essentials", "생필품", "basket", "#4ECDC4"),
        Category::with_display("entertainment", "Entertainment", "문화생활", "musical-notes", "#45B7D1"),
        Category::with_display("hobbies", "Hobbies & Fun", "취미", "game-controller", "#96CEB4"),
        Category::with_display("transport", "Transport", "교통비", "car", "#FFEAA7"),
        Category::with_display("travel", "Travel & Leisure", "여행", "airplane", "#DDA0DD"),
        Category::with_display("family", "Family & Friends", "가족·친구", "people", "#FFB6C1"),
        Category::with_display("shopping", "Shopping", "장보기", "bag", "#F8BBD9"),
        Category::with_display("miscellaneous", "Miscellaneous", "기타", "paw", "#BDBDBD"),
    ];

    // Static data, invariants hold by construction
    CategorySet::new(categories, FALLBACK_CATEGORY)
        .expect("built-in category set is valid")
}

// ============================================================================
// KEYWORD DICTIONARY
// ============================================================================

/// The built-in Korean/English keyword tables, one entry per category in
/// the order ties should resolve
pub fn default_dictionary() -> KeywordDictionary {
    KeywordDictionary::builder(FALLBACK_CATEGORY)
        .entry(
            "dining",
            [
                // Korean keywords
                "식사", "밥", "점심", "저녁", "아침", "간식", "커피", "카페", "음료", "치킨",
                "피자", "햄버거", "라면", "김밥", "도시락", "회", "고기", "삼겹살", "갈비",
                "불고기", "찌개", "국", "면", "파스타", "중국집", "일식", "양식", "한식",
                "분식", "야식", "술", "맥주", "소주", "와인", "막걸리", "스타벅스", "이디야",
                "할리스", "탐앤탐스", "맥도날드", "kfc", "버거킹", "롯데리아", "배달의민족",
                "요기요", "쿠팡이츠", "배달",
                // English keywords
                "restaurant", "food", "meal", "lunch", "dinner", "breakfast", "coffee", "cafe",
                "drink", "chicken", "pizza", "burger", "delivery", "starbucks", "mcdonald",
            ],
        )
        .entry(
            "essentials",
            [
                // Household and personal care
                "세제", "샴푸", "비누", "치약", "칫솔", "화장지", "휴지", "물티슈", "세탁",
                "청소", "세안", "로션", "크림", "마스크팩", "선크림", "바디워시", "린스",
                "컨디셔너", "약", "병원", "약국", "의료비", "진료비", "감기약", "두통약",
                "비타민", "올리브영", "다이소", "gs25", "cu", "세븐일레븐", "이마트24",
                // English keywords
                "pharmacy", "medicine", "hospital", "shampoo", "soap", "toothbrush", "tissue",
            ],
        )
        .entry(
            "entertainment",
            [
                // Culture and media
                "영화", "영화관", "cgv", "롯데시네마", "메가박스", "넷플릭스", "유튜브", "멜론",
                "스포티파이", "공연", "콘서트", "연극", "뮤지컬", "전시회", "박물관", "미술관",
                "독서", "책", "서점", "교보문고", "영풍문고", "알라딘", "음악", "앨범", "cd",
                "스트리밍",
                // English keywords
                "movie", "cinema", "netflix", "youtube", "spotify", "concert", "theater",
                "book", "music",
            ],
        )
        .entry(
            "hobbies",
            [
                // Games, sports, creative
                "게임", "플레이스테이션", "ps5", "ps4", "닌텐도", "스위치", "xbox", "스팀",
                "pc방", "운동", "헬스", "수영", "요가", "필라테스", "테니스", "골프", "축구",
                "농구", "야구", "등산", "자전거", "러닝", "마라톤", "체육관", "사진", "카메라",
                "렌즈", "촬영", "인화", "그림", "미술", "화구", "붓", "물감", "크레용",
                // English keywords
                "game", "playstation", "nintendo", "steam", "gym", "fitness", "yoga", "camera",
            ],
        )
        .entry(
            "transport",
            [
                // Getting around
                "지하철", "버스", "택시", "카카오택시", "타다", "ktx", "srt", "고속버스",
                "시외버스", "기차", "전철", "교통카드", "t머니", "하나로카드", "주유", "기름",
                "충전", "주차", "주차비", "톨게이트", "하이패스", "렌터카", "쏘카", "그린카",
                "카셰어링",
                // English keywords
                "subway", "bus", "taxi", "train", "gas", "parking", "uber", "transport",
            ],
        )
        .entry(
            "travel",
            [
                // Trips and lodging
                "여행", "호텔", "숙박", "펜션", "리조트", "모텔", "민박", "에어비앤비", "야놀자",
                "여기어때", "항공", "비행기", "대한항공", "아시아나", "진에어", "제주항공",
                "티웨이", "피치", "여행사", "하나투어", "모두투어", "노랑풍선", "관광", "명소",
                "테마파크", "놀이공원", "롯데월드", "에버랜드", "디즈니랜드", "온천", "spa",
                "마사지", "찜질방", "사우나",
                // English keywords
                "travel", "hotel", "flight", "airline", "resort", "airbnb", "booking", "trip",
                "vacation",
            ],
        )
        .entry(
            "family",
            [
                // Family, friends, occasions
                "가족", "부모님", "어머니", "아버지", "엄마", "아빠", "형", "누나", "언니",
                "동생", "친구", "동료", "회식", "모임", "파티", "생일", "결혼식", "돌잔치",
                "장례식", "선물", "용돈", "축의금", "부의금", "경조사", "데이트", "육아",
                "기저귀", "분유", "아기용품", "장난감",
                // English keywords
                "family", "friend", "gift", "party", "birthday", "wedding", "baby", "toy",
            ],
        )
        .entry(
            "shopping",
            [
                // Retail, online, electronics, furniture
                "쇼핑", "옷", "의류", "신발", "가방", "액세서리", "화장품", "향수", "백화점",
                "롯데백화점", "신세계", "현대백화점", "이마트", "홈플러스", "코스트코",
                "온라인쇼핑", "쿠팡", "11번가", "g마켓", "옥션", "네이버쇼핑", "티몬", "위메프",
                "지마켓", "인터파크", "하이마트", "전자제품", "휴대폰", "스마트폰", "컴퓨터",
                "노트북", "가구", "침대", "소파", "책상", "의자", "가전제품", "냉장고", "세탁기",
                "에어컨",
                // English keywords
                "shopping", "clothes", "shoes", "bag", "cosmetics", "perfume", "electronics",
                "computer", "phone",
            ],
        )
        .entry(
            "miscellaneous",
            [
                // Fees, finance, utilities
                "기타", "잡비", "기부", "세금", "과태료", "벌금", "수수료", "연회비", "멤버십",
                "보험", "적금", "예금", "투자", "주식", "펀드", "대출", "이자", "인터넷",
                "통신비", "핸드폰요금", "전기세", "가스비", "수도세", "관리비", "월세", "전세",
                // English keywords
                "fee", "tax", "insurance", "investment", "internet", "utility", "rent", "misc",
            ],
        )
        .build()
        .expect("built-in dictionary is valid")
}

// ============================================================================
// TESTS
// ============================================================================
