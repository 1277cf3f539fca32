// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator lookup tables.
//!
//! Values are hand scores from 1 (royal flush) to 7462 (seven high). The
//! tables have been generated enumerating all 7462 distinct five cards hands,
//! each hand rank multiset is stored once at the index computed from its
//! cards bit ranks or, for hands with paired ranks, at the index computed by
//! [find_fast](super::five::find_fast) from the product of the ranks primes.

/// Flushes and straight flushes scores indexed by the cards rank bits.
#[rustfmt::skip]
pub(crate) static FLUSHES: [u16; 8192] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 9,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1599,
    0, 0, 0, 0, 0, 0, 0, 1598, 0, 0, 0, 1597, 0, 1596, 8, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1595,
    0, 0, 0, 0, 0, 0, 0, 1594, 0, 0, 0, 1593, 0, 1592, 1591, 0,
    0, 0, 0, 0, 0, 0, 0, 1590, 0, 0, 0, 1589, 0, 1588, 1587, 0,
    0, 0, 0, 1586, 0, 1585, 1584, 0, 0, 1583, 1582, 0, 7, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1581,
    0, 0, 0, 0, 0, 0, 0, 1580, 0, 0, 0, 1579, 0, 1578, 1577, 0,
    0, 0, 0, 0, 0, 0, 0, 1576, 0, 0, 0, 1575, 0, 1574, 1573, 0,
    0, 0, 0, 1572, 0, 1571, 1570, 0, 0, 1569, 1568, 0, 1567, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1566, 0, 0, 0, 1565, 0, 1564, 1563, 0,
    0, 0, 0, 1562, 0, 1561, 1560, 0, 0, 1559, 1558, 0, 1557, 0, 0, 0,
    0, 0, 0, 1556, 0, 1555, 1554, 0, 0, 1553, 1552, 0, 1551, 0, 0, 0,
    0, 1550, 1549, 0, 1548, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1547,
    0, 0, 0, 0, 0, 0, 0, 1546, 0, 0, 0, 1545, 0, 1544, 1543, 0,
    0, 0, 0, 0, 0, 0, 0, 1542, 0, 0, 0, 1541, 0, 1540, 1539, 0,
    0, 0, 0, 1538, 0, 1537, 1536, 0, 0, 1535, 1534, 0, 1533, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1532, 0, 0, 0, 1531, 0, 1530, 1529, 0,
    0, 0, 0, 1528, 0, 1527, 1526, 0, 0, 1525, 1524, 0, 1523, 0, 0, 0,
    0, 0, 0, 1522, 0, 1521, 1520, 0, 0, 1519, 1518, 0, 1517, 0, 0, 0,
    0, 1516, 1515, 0, 1514, 0, 0, 0, 1513, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1512, 0, 0, 0, 1511, 0, 1510, 1509, 0,
    0, 0, 0, 1508, 0, 1507, 1506, 0, 0, 1505, 1504, 0, 1503, 0, 0, 0,
    0, 0, 0, 1502, 0, 1501, 1500, 0, 0, 1499, 1498, 0, 1497, 0, 0, 0,
    0, 1496, 1495, 0, 1494, 0, 0, 0, 1493, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1492, 0, 1491, 1490, 0, 0, 1489, 1488, 0, 1487, 0, 0, 0,
    0, 1486, 1485, 0, 1484, 0, 0, 0, 1483, 0, 0, 0, 0, 0, 0, 0,
    0, 1482, 1481, 0, 1480, 0, 0, 0, 1479, 0, 0, 0, 0, 0, 0, 0,
    5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1478,
    0, 0, 0, 0, 0, 0, 0, 1477, 0, 0, 0, 1476, 0, 1475, 1474, 0,
    0, 0, 0, 0, 0, 0, 0, 1473, 0, 0, 0, 1472, 0, 1471, 1470, 0,
    0, 0, 0, 1469, 0, 1468, 1467, 0, 0, 1466, 1465, 0, 1464, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1463, 0, 0, 0, 1462, 0, 1461, 1460, 0,
    0, 0, 0, 1459, 0, 1458, 1457, 0, 0, 1456, 1455, 0, 1454, 0, 0, 0,
    0, 0, 0, 1453, 0, 1452, 1451, 0, 0, 1450, 1449, 0, 1448, 0, 0, 0,
    0, 1447, 1446, 0, 1445, 0, 0, 0, 1444, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1443, 0, 0, 0, 1442, 0, 1441, 1440, 0,
    0, 0, 0, 1439, 0, 1438, 1437, 0, 0, 1436, 1435, 0, 1434, 0, 0, 0,
    0, 0, 0, 1433, 0, 1432, 1431, 0, 0, 1430, 1429, 0, 1428, 0, 0, 0,
    0, 1427, 1426, 0, 1425, 0, 0, 0, 1424, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1423, 0, 1422, 1421, 0, 0, 1420, 1419, 0, 1418, 0, 0, 0,
    0, 1417, 1416, 0, 1415, 0, 0, 0, 1414, 0, 0, 0, 0, 0, 0, 0,
    0, 1413, 1412, 0, 1411, 0, 0, 0, 1410, 0, 0, 0, 0, 0, 0, 0,
    1409, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1408, 0, 0, 0, 1407, 0, 1406, 1405, 0,
    0, 0, 0, 1404, 0, 1403, 1402, 0, 0, 1401, 1400, 0, 1399, 0, 0, 0,
    0, 0, 0, 1398, 0, 1397, 1396, 0, 0, 1395, 1394, 0, 1393, 0, 0, 0,
    0, 1392, 1391, 0, 1390, 0, 0, 0, 1389, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1388, 0, 1387, 1386, 0, 0, 1385, 1384, 0, 1383, 0, 0, 0,
    0, 1382, 1381, 0, 1380, 0, 0, 0, 1379, 0, 0, 0, 0, 0, 0, 0,
    0, 1378, 1377, 0, 1376, 0, 0, 0, 1375, 0, 0, 0, 0, 0, 0, 0,
    1374, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1373, 0, 1372, 1371, 0, 0, 1370, 1369, 0, 1368, 0, 0, 0,
    0, 1367, 1366, 0, 1365, 0, 0, 0, 1364, 0, 0, 0, 0, 0, 0, 0,
    0, 1363, 1362, 0, 1361, 0, 0, 0, 1360, 0, 0, 0, 0, 0, 0, 0,
    1359, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1358, 1357, 0, 1356, 0, 0, 0, 1355, 0, 0, 0, 0, 0, 0, 0,
    1354, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1353,
    0, 0, 0, 0, 0, 0, 0, 1352, 0, 0, 0, 1351, 0, 1350, 1349, 0,
    0, 0, 0, 0, 0, 0, 0, 1348, 0, 0, 0, 1347, 0, 1346, 1345, 0,
    0, 0, 0, 1344, 0, 1343, 1342, 0, 0, 1341, 1340, 0, 1339, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1338, 0, 0, 0, 1337, 0, 1336, 1335, 0,
    0, 0, 0, 1334, 0, 1333, 1332, 0, 0, 1331, 1330, 0, 1329, 0, 0, 0,
    0, 0, 0, 1328, 0, 1327, 1326, 0, 0, 1325, 1324, 0, 1323, 0, 0, 0,
    0, 1322, 1321, 0, 1320, 0, 0, 0, 1319, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1318, 0, 0, 0, 1317, 0, 1316, 1315, 0,
    0, 0, 0, 1314, 0, 1313, 1312, 0, 0, 1311, 1310, 0, 1309, 0, 0, 0,
    0, 0, 0, 1308, 0, 1307, 1306, 0, 0, 1305, 1304, 0, 1303, 0, 0, 0,
    0, 1302, 1301, 0, 1300, 0, 0, 0, 1299, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1298, 0, 1297, 1296, 0, 0, 1295, 1294, 0, 1293, 0, 0, 0,
    0, 1292, 1291, 0, 1290, 0, 0, 0, 1289, 0, 0, 0, 0, 0, 0, 0,
    0, 1288, 1287, 0, 1286, 0, 0, 0, 1285, 0, 0, 0, 0, 0, 0, 0,
    1284, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1283, 0, 0, 0, 1282, 0, 1281, 1280, 0,
    0, 0, 0, 1279, 0, 1278, 1277, 0, 0, 1276, 1275, 0, 1274, 0, 0, 0,
    0, 0, 0, 1273, 0, 1272, 1271, 0, 0, 1270, 1269, 0, 1268, 0, 0, 0,
    0, 1267, 1266, 0, 1265, 0, 0, 0, 1264, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1263, 0, 1262, 1261, 0, 0, 1260, 1259, 0, 1258, 0, 0, 0,
    0, 1257, 1256, 0, 1255, 0, 0, 0, 1254, 0, 0, 0, 0, 0, 0, 0,
    0, 1253, 1252, 0, 1251, 0, 0, 0, 1250, 0, 0, 0, 0, 0, 0, 0,
    1249, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1248, 0, 1247, 1246, 0, 0, 1245, 1244, 0, 1243, 0, 0, 0,
    0, 1242, 1241, 0, 1240, 0, 0, 0, 1239, 0, 0, 0, 0, 0, 0, 0,
    0, 1238, 1237, 0, 1236, 0, 0, 0, 1235, 0, 0, 0, 0, 0, 0, 0,
    1234, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1233, 1232, 0, 1231, 0, 0, 0, 1230, 0, 0, 0, 0, 0, 0, 0,
    1229, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1228, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1227, 0, 0, 0, 1226, 0, 1225, 1224, 0,
    0, 0, 0, 1223, 0, 1222, 1221, 0, 0, 1220, 1219, 0, 1218, 0, 0, 0,
    0, 0, 0, 1217, 0, 1216, 1215, 0, 0, 1214, 1213, 0, 1212, 0, 0, 0,
    0, 1211, 1210, 0, 1209, 0, 0, 0, 1208, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1207, 0, 1206, 1205, 0, 0, 1204, 1203, 0, 1202, 0, 0, 0,
    0, 1201, 1200, 0, 1199, 0, 0, 0, 1198, 0, 0, 0, 0, 0, 0, 0,
    0, 1197, 1196, 0, 1195, 0, 0, 0, 1194, 0, 0, 0, 0, 0, 0, 0,
    1193, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1192, 0, 1191, 1190, 0, 0, 1189, 1188, 0, 1187, 0, 0, 0,
    0, 1186, 1185, 0, 1184, 0, 0, 0, 1183, 0, 0, 0, 0, 0, 0, 0,
    0, 1182, 1181, 0, 1180, 0, 0, 0, 1179, 0, 0, 0, 0, 0, 0, 0,
    1178, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1177, 1176, 0, 1175, 0, 0, 0, 1174, 0, 0, 0, 0, 0, 0, 0,
    1173, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1172, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1171, 0, 1170, 1169, 0, 0, 1168, 1167, 0, 1166, 0, 0, 0,
    0, 1165, 1164, 0, 1163, 0, 0, 0, 1162, 0, 0, 0, 0, 0, 0, 0,
    0, 1161, 1160, 0, 1159, 0, 0, 0, 1158, 0, 0, 0, 0, 0, 0, 0,
    1157, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1156, 1155, 0, 1154, 0, 0, 0, 1153, 0, 0, 0, 0, 0, 0, 0,
    1152, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1151, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1150, 1149, 0, 1148, 0, 0, 0, 1147, 0, 0, 0, 0, 0, 0, 0,
    1146, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1145, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1144,
    0, 0, 0, 0, 0, 0, 0, 1143, 0, 0, 0, 1142, 0, 1141, 1140, 0,
    0, 0, 0, 0, 0, 0, 0, 1139, 0, 0, 0, 1138, 0, 1137, 1136, 0,
    0, 0, 0, 1135, 0, 1134, 1133, 0, 0, 1132, 1131, 0, 1130, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1129, 0, 0, 0, 1128, 0, 1127, 1126, 0,
    0, 0, 0, 1125, 0, 1124, 1123, 0, 0, 1122, 1121, 0, 1120, 0, 0, 0,
    0, 0, 0, 1119, 0, 1118, 1117, 0, 0, 1116, 1115, 0, 1114, 0, 0, 0,
    0, 1113, 1112, 0, 1111, 0, 0, 0, 1110, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1109, 0, 0, 0, 1108, 0, 1107, 1106, 0,
    0, 0, 0, 1105, 0, 1104, 1103, 0, 0, 1102, 1101, 0, 1100, 0, 0, 0,
    0, 0, 0, 1099, 0, 1098, 1097, 0, 0, 1096, 1095, 0, 1094, 0, 0, 0,
    0, 1093, 1092, 0, 1091, 0, 0, 0, 1090, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1089, 0, 1088, 1087, 0, 0, 1086, 1085, 0, 1084, 0, 0, 0,
    0, 1083, 1082, 0, 1081, 0, 0, 0, 1080, 0, 0, 0, 0, 0, 0, 0,
    0, 1079, 1078, 0, 1077, 0, 0, 0, 1076, 0, 0, 0, 0, 0, 0, 0,
    1075, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1074, 0, 0, 0, 1073, 0, 1072, 1071, 0,
    0, 0, 0, 1070, 0, 1069, 1068, 0, 0, 1067, 1066, 0, 1065, 0, 0, 0,
    0, 0, 0, 1064, 0, 1063, 1062, 0, 0, 1061, 1060, 0, 1059, 0, 0, 0,
    0, 1058, 1057, 0, 1056, 0, 0, 0, 1055, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1054, 0, 1053, 1052, 0, 0, 1051, 1050, 0, 1049, 0, 0, 0,
    0, 1048, 1047, 0, 1046, 0, 0, 0, 1045, 0, 0, 0, 0, 0, 0, 0,
    0, 1044, 1043, 0, 1042, 0, 0, 0, 1041, 0, 0, 0, 0, 0, 0, 0,
    1040, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 1039, 0, 1038, 1037, 0, 0, 1036, 1035, 0, 1034, 0, 0, 0,
    0, 1033, 1032, 0, 1031, 0, 0, 0, 1030, 0, 0, 0, 0, 0, 0, 0,
    0, 1029, 1028, 0, 1027, 0, 0, 0, 1026, 0, 0, 0, 0, 0, 0, 0,
    1025, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 1024, 1023, 0, 1022, 0, 0, 0, 1021, 0, 0, 0, 0, 0, 0, 0,
    1020, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1019, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1018, 0, 0, 0, 1017, 0, 1016, 1015, 0,
    0, 0, 0, 1014, 0, 1013, 1012, 0, 0, 1011, 1010, 0, 1009, 0, 0, 0,
    0, 0, 0, 1008, 0, 1007, 1006, 0, 0, 1005, 1004, 0, 1003, 0, 0, 0,
    0, 1002, 1001, 0, 1000, 0, 0, 0, 999, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 998, 0, 997, 996, 0, 0, 995, 994, 0, 993, 0, 0, 0,
    0, 992, 991, 0, 990, 0, 0, 0, 989, 0, 0, 0, 0, 0, 0, 0,
    0, 988, 987, 0, 986, 0, 0, 0, 985, 0, 0, 0, 0, 0, 0, 0,
    984, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 983, 0, 982, 981, 0, 0, 980, 979, 0, 978, 0, 0, 0,
    0, 977, 976, 0, 975, 0, 0, 0, 974, 0, 0, 0, 0, 0, 0, 0,
    0, 973, 972, 0, 971, 0, 0, 0, 970, 0, 0, 0, 0, 0, 0, 0,
    969, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 968, 967, 0, 966, 0, 0, 0, 965, 0, 0, 0, 0, 0, 0, 0,
    964, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    963, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 962, 0, 961, 960, 0, 0, 959, 958, 0, 957, 0, 0, 0,
    0, 956, 955, 0, 954, 0, 0, 0, 953, 0, 0, 0, 0, 0, 0, 0,
    0, 952, 951, 0, 950, 0, 0, 0, 949, 0, 0, 0, 0, 0, 0, 0,
    948, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 947, 946, 0, 945, 0, 0, 0, 944, 0, 0, 0, 0, 0, 0, 0,
    943, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    942, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 941, 940, 0, 939, 0, 0, 0, 938, 0, 0, 0, 0, 0, 0, 0,
    937, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    936, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    935, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 934, 0, 0, 0, 933, 0, 932, 931, 0,
    0, 0, 0, 930, 0, 929, 928, 0, 0, 927, 926, 0, 925, 0, 0, 0,
    0, 0, 0, 924, 0, 923, 922, 0, 0, 921, 920, 0, 919, 0, 0, 0,
    0, 918, 917, 0, 916, 0, 0, 0, 915, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 914, 0, 913, 912, 0, 0, 911, 910, 0, 909, 0, 0, 0,
    0, 908, 907, 0, 906, 0, 0, 0, 905, 0, 0, 0, 0, 0, 0, 0,
    0, 904, 903, 0, 902, 0, 0, 0, 901, 0, 0, 0, 0, 0, 0, 0,
    900, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 899, 0, 898, 897, 0, 0, 896, 895, 0, 894, 0, 0, 0,
    0, 893, 892, 0, 891, 0, 0, 0, 890, 0, 0, 0, 0, 0, 0, 0,
    0, 889, 888, 0, 887, 0, 0, 0, 886, 0, 0, 0, 0, 0, 0, 0,
    885, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 884, 883, 0, 882, 0, 0, 0, 881, 0, 0, 0, 0, 0, 0, 0,
    880, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    879, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 878, 0, 877, 876, 0, 0, 875, 874, 0, 873, 0, 0, 0,
    0, 872, 871, 0, 870, 0, 0, 0, 869, 0, 0, 0, 0, 0, 0, 0,
    0, 868, 867, 0, 866, 0, 0, 0, 865, 0, 0, 0, 0, 0, 0, 0,
    864, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 863, 862, 0, 861, 0, 0, 0, 860, 0, 0, 0, 0, 0, 0, 0,
    859, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    858, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 857, 856, 0, 855, 0, 0, 0, 854, 0, 0, 0, 0, 0, 0, 0,
    853, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    852, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    851, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 850, 0, 849, 848, 0, 0, 847, 846, 0, 845, 0, 0, 0,
    0, 844, 843, 0, 842, 0, 0, 0, 841, 0, 0, 0, 0, 0, 0, 0,
    0, 840, 839, 0, 838, 0, 0, 0, 837, 0, 0, 0, 0, 0, 0, 0,
    836, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 835, 834, 0, 833, 0, 0, 0, 832, 0, 0, 0, 0, 0, 0, 0,
    831, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    830, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 829, 828, 0, 827, 0, 0, 0, 826, 0, 0, 0, 0, 0, 0, 0,
    825, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    824, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    823, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 822, 821, 0, 820, 0, 0, 0, 819, 0, 0, 0, 0, 0, 0, 0,
    818, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    817, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    816, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10,
    0, 0, 0, 0, 0, 0, 0, 815, 0, 0, 0, 814, 0, 813, 812, 0,
    0, 0, 0, 0, 0, 0, 0, 811, 0, 0, 0, 810, 0, 809, 808, 0,
    0, 0, 0, 807, 0, 806, 805, 0, 0, 804, 803, 0, 802, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 801, 0, 0, 0, 800, 0, 799, 798, 0,
    0, 0, 0, 797, 0, 796, 795, 0, 0, 794, 793, 0, 792, 0, 0, 0,
    0, 0, 0, 791, 0, 790, 789, 0, 0, 788, 787, 0, 786, 0, 0, 0,
    0, 785, 784, 0, 783, 0, 0, 0, 782, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 781, 0, 0, 0, 780, 0, 779, 778, 0,
    0, 0, 0, 777, 0, 776, 775, 0, 0, 774, 773, 0, 772, 0, 0, 0,
    0, 0, 0, 771, 0, 770, 769, 0, 0, 768, 767, 0, 766, 0, 0, 0,
    0, 765, 764, 0, 763, 0, 0, 0, 762, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 761, 0, 760, 759, 0, 0, 758, 757, 0, 756, 0, 0, 0,
    0, 755, 754, 0, 753, 0, 0, 0, 752, 0, 0, 0, 0, 0, 0, 0,
    0, 751, 750, 0, 749, 0, 0, 0, 748, 0, 0, 0, 0, 0, 0, 0,
    747, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 746, 0, 0, 0, 745, 0, 744, 743, 0,
    0, 0, 0, 742, 0, 741, 740, 0, 0, 739, 738, 0, 737, 0, 0, 0,
    0, 0, 0, 736, 0, 735, 734, 0, 0, 733, 732, 0, 731, 0, 0, 0,
    0, 730, 729, 0, 728, 0, 0, 0, 727, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 726, 0, 725, 724, 0, 0, 723, 722, 0, 721, 0, 0, 0,
    0, 720, 719, 0, 718, 0, 0, 0, 717, 0, 0, 0, 0, 0, 0, 0,
    0, 716, 715, 0, 714, 0, 0, 0, 713, 0, 0, 0, 0, 0, 0, 0,
    712, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 711, 0, 710, 709, 0, 0, 708, 707, 0, 706, 0, 0, 0,
    0, 705, 704, 0, 703, 0, 0, 0, 702, 0, 0, 0, 0, 0, 0, 0,
    0, 701, 700, 0, 699, 0, 0, 0, 698, 0, 0, 0, 0, 0, 0, 0,
    697, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 696, 695, 0, 694, 0, 0, 0, 693, 0, 0, 0, 0, 0, 0, 0,
    692, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    691, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 690, 0, 0, 0, 689, 0, 688, 687, 0,
    0, 0, 0, 686, 0, 685, 684, 0, 0, 683, 682, 0, 681, 0, 0, 0,
    0, 0, 0, 680, 0, 679, 678, 0, 0, 677, 676, 0, 675, 0, 0, 0,
    0, 674, 673, 0, 672, 0, 0, 0, 671, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 670, 0, 669, 668, 0, 0, 667, 666, 0, 665, 0, 0, 0,
    0, 664, 663, 0, 662, 0, 0, 0, 661, 0, 0, 0, 0, 0, 0, 0,
    0, 660, 659, 0, 658, 0, 0, 0, 657, 0, 0, 0, 0, 0, 0, 0,
    656, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 655, 0, 654, 653, 0, 0, 652, 651, 0, 650, 0, 0, 0,
    0, 649, 648, 0, 647, 0, 0, 0, 646, 0, 0, 0, 0, 0, 0, 0,
    0, 645, 644, 0, 643, 0, 0, 0, 642, 0, 0, 0, 0, 0, 0, 0,
    641, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 640, 639, 0, 638, 0, 0, 0, 637, 0, 0, 0, 0, 0, 0, 0,
    636, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    635, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 634, 0, 633, 632, 0, 0, 631, 630, 0, 629, 0, 0, 0,
    0, 628, 627, 0, 626, 0, 0, 0, 625, 0, 0, 0, 0, 0, 0, 0,
    0, 624, 623, 0, 622, 0, 0, 0, 621, 0, 0, 0, 0, 0, 0, 0,
    620, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 619, 618, 0, 617, 0, 0, 0, 616, 0, 0, 0, 0, 0, 0, 0,
    615, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    614, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 613, 612, 0, 611, 0, 0, 0, 610, 0, 0, 0, 0, 0, 0, 0,
    609, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    608, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    607, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 606, 0, 0, 0, 605, 0, 604, 603, 0,
    0, 0, 0, 602, 0, 601, 600, 0, 0, 599, 598, 0, 597, 0, 0, 0,
    0, 0, 0, 596, 0, 595, 594, 0, 0, 593, 592, 0, 591, 0, 0, 0,
    0, 590, 589, 0, 588, 0, 0, 0, 587, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 586, 0, 585, 584, 0, 0, 583, 582, 0, 581, 0, 0, 0,
    0, 580, 579, 0, 578, 0, 0, 0, 577, 0, 0, 0, 0, 0, 0, 0,
    0, 576, 575, 0, 574, 0, 0, 0, 573, 0, 0, 0, 0, 0, 0, 0,
    572, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 571, 0, 570, 569, 0, 0, 568, 567, 0, 566, 0, 0, 0,
    0, 565, 564, 0, 563, 0, 0, 0, 562, 0, 0, 0, 0, 0, 0, 0,
    0, 561, 560, 0, 559, 0, 0, 0, 558, 0, 0, 0, 0, 0, 0, 0,
    557, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 556, 555, 0, 554, 0, 0, 0, 553, 0, 0, 0, 0, 0, 0, 0,
    552, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    551, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 550, 0, 549, 548, 0, 0, 547, 546, 0, 545, 0, 0, 0,
    0, 544, 543, 0, 542, 0, 0, 0, 541, 0, 0, 0, 0, 0, 0, 0,
    0, 540, 539, 0, 538, 0, 0, 0, 537, 0, 0, 0, 0, 0, 0, 0,
    536, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 535, 534, 0, 533, 0, 0, 0, 532, 0, 0, 0, 0, 0, 0, 0,
    531, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    530, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 529, 528, 0, 527, 0, 0, 0, 526, 0, 0, 0, 0, 0, 0, 0,
    525, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    524, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    523, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 522, 0, 521, 520, 0, 0, 519, 518, 0, 517, 0, 0, 0,
    0, 516, 515, 0, 514, 0, 0, 0, 513, 0, 0, 0, 0, 0, 0, 0,
    0, 512, 511, 0, 510, 0, 0, 0, 509, 0, 0, 0, 0, 0, 0, 0,
    508, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 507, 506, 0, 505, 0, 0, 0, 504, 0, 0, 0, 0, 0, 0, 0,
    503, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    502, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 501, 500, 0, 499, 0, 0, 0, 498, 0, 0, 0, 0, 0, 0, 0,
    497, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    496, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    495, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 494, 493, 0, 492, 0, 0, 0, 491, 0, 0, 0, 0, 0, 0, 0,
    490, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    489, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    488, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    487, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 486, 0, 0, 0, 485, 0, 484, 483, 0,
    0, 0, 0, 482, 0, 481, 480, 0, 0, 479, 478, 0, 477, 0, 0, 0,
    0, 0, 0, 476, 0, 475, 474, 0, 0, 473, 472, 0, 471, 0, 0, 0,
    0, 470, 469, 0, 468, 0, 0, 0, 467, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 466, 0, 465, 464, 0, 0, 463, 462, 0, 461, 0, 0, 0,
    0, 460, 459, 0, 458, 0, 0, 0, 457, 0, 0, 0, 0, 0, 0, 0,
    0, 456, 455, 0, 454, 0, 0, 0, 453, 0, 0, 0, 0, 0, 0, 0,
    452, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 451, 0, 450, 449, 0, 0, 448, 447, 0, 446, 0, 0, 0,
    0, 445, 444, 0, 443, 0, 0, 0, 442, 0, 0, 0, 0, 0, 0, 0,
    0, 441, 440, 0, 439, 0, 0, 0, 438, 0, 0, 0, 0, 0, 0, 0,
    437, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 436, 435, 0, 434, 0, 0, 0, 433, 0, 0, 0, 0, 0, 0, 0,
    432, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    431, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 430, 0, 429, 428, 0, 0, 427, 426, 0, 425, 0, 0, 0,
    0, 424, 423, 0, 422, 0, 0, 0, 421, 0, 0, 0, 0, 0, 0, 0,
    0, 420, 419, 0, 418, 0, 0, 0, 417, 0, 0, 0, 0, 0, 0, 0,
    416, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 415, 414, 0, 413, 0, 0, 0, 412, 0, 0, 0, 0, 0, 0, 0,
    411, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    410, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 409, 408, 0, 407, 0, 0, 0, 406, 0, 0, 0, 0, 0, 0, 0,
    405, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    404, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    403, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 402, 0, 401, 400, 0, 0, 399, 398, 0, 397, 0, 0, 0,
    0, 396, 395, 0, 394, 0, 0, 0, 393, 0, 0, 0, 0, 0, 0, 0,
    0, 392, 391, 0, 390, 0, 0, 0, 389, 0, 0, 0, 0, 0, 0, 0,
    388, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 387, 386, 0, 385, 0, 0, 0, 384, 0, 0, 0, 0, 0, 0, 0,
    383, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    382, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 381, 380, 0, 379, 0, 0, 0, 378, 0, 0, 0, 0, 0, 0, 0,
    377, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    376, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    375, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 374, 373, 0, 372, 0, 0, 0, 371, 0, 0, 0, 0, 0, 0, 0,
    370, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    369, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    368, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    367, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 366, 0, 365, 364, 0, 0, 363, 362, 0, 361, 0, 0, 0,
    0, 360, 359, 0, 358, 0, 0, 0, 357, 0, 0, 0, 0, 0, 0, 0,
    0, 356, 355, 0, 354, 0, 0, 0, 353, 0, 0, 0, 0, 0, 0, 0,
    352, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 351, 350, 0, 349, 0, 0, 0, 348, 0, 0, 0, 0, 0, 0, 0,
    347, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    346, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 345, 344, 0, 343, 0, 0, 0, 342, 0, 0, 0, 0, 0, 0, 0,
    341, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    340, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    339, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 338, 337, 0, 336, 0, 0, 0, 335, 0, 0, 0, 0, 0, 0, 0,
    334, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    333, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    332, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    331, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 330, 329, 0, 328, 0, 0, 0, 327, 0, 0, 0, 0, 0, 0, 0,
    326, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    325, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    324, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    323, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Straights and high cards scores indexed by the cards rank bits, zero
/// if ranks are not unique.
#[rustfmt::skip]
pub(crate) static UNIQUE5: [u16; 8192] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1608,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7462,
    0, 0, 0, 0, 0, 0, 0, 7461, 0, 0, 0, 7460, 0, 7459, 1607, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7458,
    0, 0, 0, 0, 0, 0, 0, 7457, 0, 0, 0, 7456, 0, 7455, 7454, 0,
    0, 0, 0, 0, 0, 0, 0, 7453, 0, 0, 0, 7452, 0, 7451, 7450, 0,
    0, 0, 0, 7449, 0, 7448, 7447, 0, 0, 7446, 7445, 0, 1606, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7444,
    0, 0, 0, 0, 0, 0, 0, 7443, 0, 0, 0, 7442, 0, 7441, 7440, 0,
    0, 0, 0, 0, 0, 0, 0, 7439, 0, 0, 0, 7438, 0, 7437, 7436, 0,
    0, 0, 0, 7435, 0, 7434, 7433, 0, 0, 7432, 7431, 0, 7430, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7429, 0, 0, 0, 7428, 0, 7427, 7426, 0,
    0, 0, 0, 7425, 0, 7424, 7423, 0, 0, 7422, 7421, 0, 7420, 0, 0, 0,
    0, 0, 0, 7419, 0, 7418, 7417, 0, 0, 7416, 7415, 0, 7414, 0, 0, 0,
    0, 7413, 7412, 0, 7411, 0, 0, 0, 1605, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7410,
    0, 0, 0, 0, 0, 0, 0, 7409, 0, 0, 0, 7408, 0, 7407, 7406, 0,
    0, 0, 0, 0, 0, 0, 0, 7405, 0, 0, 0, 7404, 0, 7403, 7402, 0,
    0, 0, 0, 7401, 0, 7400, 7399, 0, 0, 7398, 7397, 0, 7396, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7395, 0, 0, 0, 7394, 0, 7393, 7392, 0,
    0, 0, 0, 7391, 0, 7390, 7389, 0, 0, 7388, 7387, 0, 7386, 0, 0, 0,
    0, 0, 0, 7385, 0, 7384, 7383, 0, 0, 7382, 7381, 0, 7380, 0, 0, 0,
    0, 7379, 7378, 0, 7377, 0, 0, 0, 7376, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7375, 0, 0, 0, 7374, 0, 7373, 7372, 0,
    0, 0, 0, 7371, 0, 7370, 7369, 0, 0, 7368, 7367, 0, 7366, 0, 0, 0,
    0, 0, 0, 7365, 0, 7364, 7363, 0, 0, 7362, 7361, 0, 7360, 0, 0, 0,
    0, 7359, 7358, 0, 7357, 0, 0, 0, 7356, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7355, 0, 7354, 7353, 0, 0, 7352, 7351, 0, 7350, 0, 0, 0,
    0, 7349, 7348, 0, 7347, 0, 0, 0, 7346, 0, 0, 0, 0, 0, 0, 0,
    0, 7345, 7344, 0, 7343, 0, 0, 0, 7342, 0, 0, 0, 0, 0, 0, 0,
    1604, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7341,
    0, 0, 0, 0, 0, 0, 0, 7340, 0, 0, 0, 7339, 0, 7338, 7337, 0,
    0, 0, 0, 0, 0, 0, 0, 7336, 0, 0, 0, 7335, 0, 7334, 7333, 0,
    0, 0, 0, 7332, 0, 7331, 7330, 0, 0, 7329, 7328, 0, 7327, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7326, 0, 0, 0, 7325, 0, 7324, 7323, 0,
    0, 0, 0, 7322, 0, 7321, 7320, 0, 0, 7319, 7318, 0, 7317, 0, 0, 0,
    0, 0, 0, 7316, 0, 7315, 7314, 0, 0, 7313, 7312, 0, 7311, 0, 0, 0,
    0, 7310, 7309, 0, 7308, 0, 0, 0, 7307, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7306, 0, 0, 0, 7305, 0, 7304, 7303, 0,
    0, 0, 0, 7302, 0, 7301, 7300, 0, 0, 7299, 7298, 0, 7297, 0, 0, 0,
    0, 0, 0, 7296, 0, 7295, 7294, 0, 0, 7293, 7292, 0, 7291, 0, 0, 0,
    0, 7290, 7289, 0, 7288, 0, 0, 0, 7287, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7286, 0, 7285, 7284, 0, 0, 7283, 7282, 0, 7281, 0, 0, 0,
    0, 7280, 7279, 0, 7278, 0, 0, 0, 7277, 0, 0, 0, 0, 0, 0, 0,
    0, 7276, 7275, 0, 7274, 0, 0, 0, 7273, 0, 0, 0, 0, 0, 0, 0,
    7272, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7271, 0, 0, 0, 7270, 0, 7269, 7268, 0,
    0, 0, 0, 7267, 0, 7266, 7265, 0, 0, 7264, 7263, 0, 7262, 0, 0, 0,
    0, 0, 0, 7261, 0, 7260, 7259, 0, 0, 7258, 7257, 0, 7256, 0, 0, 0,
    0, 7255, 7254, 0, 7253, 0, 0, 0, 7252, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7251, 0, 7250, 7249, 0, 0, 7248, 7247, 0, 7246, 0, 0, 0,
    0, 7245, 7244, 0, 7243, 0, 0, 0, 7242, 0, 0, 0, 0, 0, 0, 0,
    0, 7241, 7240, 0, 7239, 0, 0, 0, 7238, 0, 0, 0, 0, 0, 0, 0,
    7237, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7236, 0, 7235, 7234, 0, 0, 7233, 7232, 0, 7231, 0, 0, 0,
    0, 7230, 7229, 0, 7228, 0, 0, 0, 7227, 0, 0, 0, 0, 0, 0, 0,
    0, 7226, 7225, 0, 7224, 0, 0, 0, 7223, 0, 0, 0, 0, 0, 0, 0,
    7222, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 7221, 7220, 0, 7219, 0, 0, 0, 7218, 0, 0, 0, 0, 0, 0, 0,
    7217, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1603, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7216,
    0, 0, 0, 0, 0, 0, 0, 7215, 0, 0, 0, 7214, 0, 7213, 7212, 0,
    0, 0, 0, 0, 0, 0, 0, 7211, 0, 0, 0, 7210, 0, 7209, 7208, 0,
    0, 0, 0, 7207, 0, 7206, 7205, 0, 0, 7204, 7203, 0, 7202, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7201, 0, 0, 0, 7200, 0, 7199, 7198, 0,
    0, 0, 0, 7197, 0, 7196, 7195, 0, 0, 7194, 7193, 0, 7192, 0, 0, 0,
    0, 0, 0, 7191, 0, 7190, 7189, 0, 0, 7188, 7187, 0, 7186, 0, 0, 0,
    0, 7185, 7184, 0, 7183, 0, 0, 0, 7182, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7181, 0, 0, 0, 7180, 0, 7179, 7178, 0,
    0, 0, 0, 7177, 0, 7176, 7175, 0, 0, 7174, 7173, 0, 7172, 0, 0, 0,
    0, 0, 0, 7171, 0, 7170, 7169, 0, 0, 7168, 7167, 0, 7166, 0, 0, 0,
    0, 7165, 7164, 0, 7163, 0, 0, 0, 7162, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7161, 0, 7160, 7159, 0, 0, 7158, 7157, 0, 7156, 0, 0, 0,
    0, 7155, 7154, 0, 7153, 0, 0, 0, 7152, 0, 0, 0, 0, 0, 0, 0,
    0, 7151, 7150, 0, 7149, 0, 0, 0, 7148, 0, 0, 0, 0, 0, 0, 0,
    7147, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7146, 0, 0, 0, 7145, 0, 7144, 7143, 0,
    0, 0, 0, 7142, 0, 7141, 7140, 0, 0, 7139, 7138, 0, 7137, 0, 0, 0,
    0, 0, 0, 7136, 0, 7135, 7134, 0, 0, 7133, 7132, 0, 7131, 0, 0, 0,
    0, 7130, 7129, 0, 7128, 0, 0, 0, 7127, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7126, 0, 7125, 7124, 0, 0, 7123, 7122, 0, 7121, 0, 0, 0,
    0, 7120, 7119, 0, 7118, 0, 0, 0, 7117, 0, 0, 0, 0, 0, 0, 0,
    0, 7116, 7115, 0, 7114, 0, 0, 0, 7113, 0, 0, 0, 0, 0, 0, 0,
    7112, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7111, 0, 7110, 7109, 0, 0, 7108, 7107, 0, 7106, 0, 0, 0,
    0, 7105, 7104, 0, 7103, 0, 0, 0, 7102, 0, 0, 0, 0, 0, 0, 0,
    0, 7101, 7100, 0, 7099, 0, 0, 0, 7098, 0, 0, 0, 0, 0, 0, 0,
    7097, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 7096, 7095, 0, 7094, 0, 0, 0, 7093, 0, 0, 0, 0, 0, 0, 0,
    7092, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    7091, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7090, 0, 0, 0, 7089, 0, 7088, 7087, 0,
    0, 0, 0, 7086, 0, 7085, 7084, 0, 0, 7083, 7082, 0, 7081, 0, 0, 0,
    0, 0, 0, 7080, 0, 7079, 7078, 0, 0, 7077, 7076, 0, 7075, 0, 0, 0,
    0, 7074, 7073, 0, 7072, 0, 0, 0, 7071, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7070, 0, 7069, 7068, 0, 0, 7067, 7066, 0, 7065, 0, 0, 0,
    0, 7064, 7063, 0, 7062, 0, 0, 0, 7061, 0, 0, 0, 0, 0, 0, 0,
    0, 7060, 7059, 0, 7058, 0, 0, 0, 7057, 0, 0, 0, 0, 0, 0, 0,
    7056, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7055, 0, 7054, 7053, 0, 0, 7052, 7051, 0, 7050, 0, 0, 0,
    0, 7049, 7048, 0, 7047, 0, 0, 0, 7046, 0, 0, 0, 0, 0, 0, 0,
    0, 7045, 7044, 0, 7043, 0, 0, 0, 7042, 0, 0, 0, 0, 0, 0, 0,
    7041, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 7040, 7039, 0, 7038, 0, 0, 0, 7037, 0, 0, 0, 0, 0, 0, 0,
    7036, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    7035, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 7034, 0, 7033, 7032, 0, 0, 7031, 7030, 0, 7029, 0, 0, 0,
    0, 7028, 7027, 0, 7026, 0, 0, 0, 7025, 0, 0, 0, 0, 0, 0, 0,
    0, 7024, 7023, 0, 7022, 0, 0, 0, 7021, 0, 0, 0, 0, 0, 0, 0,
    7020, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 7019, 7018, 0, 7017, 0, 0, 0, 7016, 0, 0, 0, 0, 0, 0, 0,
    7015, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    7014, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 7013, 7012, 0, 7011, 0, 0, 0, 7010, 0, 0, 0, 0, 0, 0, 0,
    7009, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    7008, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1602, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 7007,
    0, 0, 0, 0, 0, 0, 0, 7006, 0, 0, 0, 7005, 0, 7004, 7003, 0,
    0, 0, 0, 0, 0, 0, 0, 7002, 0, 0, 0, 7001, 0, 7000, 6999, 0,
    0, 0, 0, 6998, 0, 6997, 6996, 0, 0, 6995, 6994, 0, 6993, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6992, 0, 0, 0, 6991, 0, 6990, 6989, 0,
    0, 0, 0, 6988, 0, 6987, 6986, 0, 0, 6985, 6984, 0, 6983, 0, 0, 0,
    0, 0, 0, 6982, 0, 6981, 6980, 0, 0, 6979, 6978, 0, 6977, 0, 0, 0,
    0, 6976, 6975, 0, 6974, 0, 0, 0, 6973, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6972, 0, 0, 0, 6971, 0, 6970, 6969, 0,
    0, 0, 0, 6968, 0, 6967, 6966, 0, 0, 6965, 6964, 0, 6963, 0, 0, 0,
    0, 0, 0, 6962, 0, 6961, 6960, 0, 0, 6959, 6958, 0, 6957, 0, 0, 0,
    0, 6956, 6955, 0, 6954, 0, 0, 0, 6953, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6952, 0, 6951, 6950, 0, 0, 6949, 6948, 0, 6947, 0, 0, 0,
    0, 6946, 6945, 0, 6944, 0, 0, 0, 6943, 0, 0, 0, 0, 0, 0, 0,
    0, 6942, 6941, 0, 6940, 0, 0, 0, 6939, 0, 0, 0, 0, 0, 0, 0,
    6938, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6937, 0, 0, 0, 6936, 0, 6935, 6934, 0,
    0, 0, 0, 6933, 0, 6932, 6931, 0, 0, 6930, 6929, 0, 6928, 0, 0, 0,
    0, 0, 0, 6927, 0, 6926, 6925, 0, 0, 6924, 6923, 0, 6922, 0, 0, 0,
    0, 6921, 6920, 0, 6919, 0, 0, 0, 6918, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6917, 0, 6916, 6915, 0, 0, 6914, 6913, 0, 6912, 0, 0, 0,
    0, 6911, 6910, 0, 6909, 0, 0, 0, 6908, 0, 0, 0, 0, 0, 0, 0,
    0, 6907, 6906, 0, 6905, 0, 0, 0, 6904, 0, 0, 0, 0, 0, 0, 0,
    6903, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6902, 0, 6901, 6900, 0, 0, 6899, 6898, 0, 6897, 0, 0, 0,
    0, 6896, 6895, 0, 6894, 0, 0, 0, 6893, 0, 0, 0, 0, 0, 0, 0,
    0, 6892, 6891, 0, 6890, 0, 0, 0, 6889, 0, 0, 0, 0, 0, 0, 0,
    6888, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6887, 6886, 0, 6885, 0, 0, 0, 6884, 0, 0, 0, 0, 0, 0, 0,
    6883, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6882, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6881, 0, 0, 0, 6880, 0, 6879, 6878, 0,
    0, 0, 0, 6877, 0, 6876, 6875, 0, 0, 6874, 6873, 0, 6872, 0, 0, 0,
    0, 0, 0, 6871, 0, 6870, 6869, 0, 0, 6868, 6867, 0, 6866, 0, 0, 0,
    0, 6865, 6864, 0, 6863, 0, 0, 0, 6862, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6861, 0, 6860, 6859, 0, 0, 6858, 6857, 0, 6856, 0, 0, 0,
    0, 6855, 6854, 0, 6853, 0, 0, 0, 6852, 0, 0, 0, 0, 0, 0, 0,
    0, 6851, 6850, 0, 6849, 0, 0, 0, 6848, 0, 0, 0, 0, 0, 0, 0,
    6847, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6846, 0, 6845, 6844, 0, 0, 6843, 6842, 0, 6841, 0, 0, 0,
    0, 6840, 6839, 0, 6838, 0, 0, 0, 6837, 0, 0, 0, 0, 0, 0, 0,
    0, 6836, 6835, 0, 6834, 0, 0, 0, 6833, 0, 0, 0, 0, 0, 0, 0,
    6832, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6831, 6830, 0, 6829, 0, 0, 0, 6828, 0, 0, 0, 0, 0, 0, 0,
    6827, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6826, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6825, 0, 6824, 6823, 0, 0, 6822, 6821, 0, 6820, 0, 0, 0,
    0, 6819, 6818, 0, 6817, 0, 0, 0, 6816, 0, 0, 0, 0, 0, 0, 0,
    0, 6815, 6814, 0, 6813, 0, 0, 0, 6812, 0, 0, 0, 0, 0, 0, 0,
    6811, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6810, 6809, 0, 6808, 0, 0, 0, 6807, 0, 0, 0, 0, 0, 0, 0,
    6806, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6805, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6804, 6803, 0, 6802, 0, 0, 0, 6801, 0, 0, 0, 0, 0, 0, 0,
    6800, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6799, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6798, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6797, 0, 0, 0, 6796, 0, 6795, 6794, 0,
    0, 0, 0, 6793, 0, 6792, 6791, 0, 0, 6790, 6789, 0, 6788, 0, 0, 0,
    0, 0, 0, 6787, 0, 6786, 6785, 0, 0, 6784, 6783, 0, 6782, 0, 0, 0,
    0, 6781, 6780, 0, 6779, 0, 0, 0, 6778, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6777, 0, 6776, 6775, 0, 0, 6774, 6773, 0, 6772, 0, 0, 0,
    0, 6771, 6770, 0, 6769, 0, 0, 0, 6768, 0, 0, 0, 0, 0, 0, 0,
    0, 6767, 6766, 0, 6765, 0, 0, 0, 6764, 0, 0, 0, 0, 0, 0, 0,
    6763, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6762, 0, 6761, 6760, 0, 0, 6759, 6758, 0, 6757, 0, 0, 0,
    0, 6756, 6755, 0, 6754, 0, 0, 0, 6753, 0, 0, 0, 0, 0, 0, 0,
    0, 6752, 6751, 0, 6750, 0, 0, 0, 6749, 0, 0, 0, 0, 0, 0, 0,
    6748, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6747, 6746, 0, 6745, 0, 0, 0, 6744, 0, 0, 0, 0, 0, 0, 0,
    6743, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6742, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6741, 0, 6740, 6739, 0, 0, 6738, 6737, 0, 6736, 0, 0, 0,
    0, 6735, 6734, 0, 6733, 0, 0, 0, 6732, 0, 0, 0, 0, 0, 0, 0,
    0, 6731, 6730, 0, 6729, 0, 0, 0, 6728, 0, 0, 0, 0, 0, 0, 0,
    6727, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6726, 6725, 0, 6724, 0, 0, 0, 6723, 0, 0, 0, 0, 0, 0, 0,
    6722, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6721, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6720, 6719, 0, 6718, 0, 0, 0, 6717, 0, 0, 0, 0, 0, 0, 0,
    6716, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6715, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6714, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6713, 0, 6712, 6711, 0, 0, 6710, 6709, 0, 6708, 0, 0, 0,
    0, 6707, 6706, 0, 6705, 0, 0, 0, 6704, 0, 0, 0, 0, 0, 0, 0,
    0, 6703, 6702, 0, 6701, 0, 0, 0, 6700, 0, 0, 0, 0, 0, 0, 0,
    6699, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6698, 6697, 0, 6696, 0, 0, 0, 6695, 0, 0, 0, 0, 0, 0, 0,
    6694, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6693, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6692, 6691, 0, 6690, 0, 0, 0, 6689, 0, 0, 0, 0, 0, 0, 0,
    6688, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6687, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6686, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6685, 6684, 0, 6683, 0, 0, 0, 6682, 0, 0, 0, 0, 0, 0, 0,
    6681, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6680, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6679, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1601, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1609,
    0, 0, 0, 0, 0, 0, 0, 6678, 0, 0, 0, 6677, 0, 6676, 6675, 0,
    0, 0, 0, 0, 0, 0, 0, 6674, 0, 0, 0, 6673, 0, 6672, 6671, 0,
    0, 0, 0, 6670, 0, 6669, 6668, 0, 0, 6667, 6666, 0, 6665, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6664, 0, 0, 0, 6663, 0, 6662, 6661, 0,
    0, 0, 0, 6660, 0, 6659, 6658, 0, 0, 6657, 6656, 0, 6655, 0, 0, 0,
    0, 0, 0, 6654, 0, 6653, 6652, 0, 0, 6651, 6650, 0, 6649, 0, 0, 0,
    0, 6648, 6647, 0, 6646, 0, 0, 0, 6645, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6644, 0, 0, 0, 6643, 0, 6642, 6641, 0,
    0, 0, 0, 6640, 0, 6639, 6638, 0, 0, 6637, 6636, 0, 6635, 0, 0, 0,
    0, 0, 0, 6634, 0, 6633, 6632, 0, 0, 6631, 6630, 0, 6629, 0, 0, 0,
    0, 6628, 6627, 0, 6626, 0, 0, 0, 6625, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6624, 0, 6623, 6622, 0, 0, 6621, 6620, 0, 6619, 0, 0, 0,
    0, 6618, 6617, 0, 6616, 0, 0, 0, 6615, 0, 0, 0, 0, 0, 0, 0,
    0, 6614, 6613, 0, 6612, 0, 0, 0, 6611, 0, 0, 0, 0, 0, 0, 0,
    6610, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6609, 0, 0, 0, 6608, 0, 6607, 6606, 0,
    0, 0, 0, 6605, 0, 6604, 6603, 0, 0, 6602, 6601, 0, 6600, 0, 0, 0,
    0, 0, 0, 6599, 0, 6598, 6597, 0, 0, 6596, 6595, 0, 6594, 0, 0, 0,
    0, 6593, 6592, 0, 6591, 0, 0, 0, 6590, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6589, 0, 6588, 6587, 0, 0, 6586, 6585, 0, 6584, 0, 0, 0,
    0, 6583, 6582, 0, 6581, 0, 0, 0, 6580, 0, 0, 0, 0, 0, 0, 0,
    0, 6579, 6578, 0, 6577, 0, 0, 0, 6576, 0, 0, 0, 0, 0, 0, 0,
    6575, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6574, 0, 6573, 6572, 0, 0, 6571, 6570, 0, 6569, 0, 0, 0,
    0, 6568, 6567, 0, 6566, 0, 0, 0, 6565, 0, 0, 0, 0, 0, 0, 0,
    0, 6564, 6563, 0, 6562, 0, 0, 0, 6561, 0, 0, 0, 0, 0, 0, 0,
    6560, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6559, 6558, 0, 6557, 0, 0, 0, 6556, 0, 0, 0, 0, 0, 0, 0,
    6555, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6554, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6553, 0, 0, 0, 6552, 0, 6551, 6550, 0,
    0, 0, 0, 6549, 0, 6548, 6547, 0, 0, 6546, 6545, 0, 6544, 0, 0, 0,
    0, 0, 0, 6543, 0, 6542, 6541, 0, 0, 6540, 6539, 0, 6538, 0, 0, 0,
    0, 6537, 6536, 0, 6535, 0, 0, 0, 6534, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6533, 0, 6532, 6531, 0, 0, 6530, 6529, 0, 6528, 0, 0, 0,
    0, 6527, 6526, 0, 6525, 0, 0, 0, 6524, 0, 0, 0, 0, 0, 0, 0,
    0, 6523, 6522, 0, 6521, 0, 0, 0, 6520, 0, 0, 0, 0, 0, 0, 0,
    6519, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6518, 0, 6517, 6516, 0, 0, 6515, 6514, 0, 6513, 0, 0, 0,
    0, 6512, 6511, 0, 6510, 0, 0, 0, 6509, 0, 0, 0, 0, 0, 0, 0,
    0, 6508, 6507, 0, 6506, 0, 0, 0, 6505, 0, 0, 0, 0, 0, 0, 0,
    6504, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6503, 6502, 0, 6501, 0, 0, 0, 6500, 0, 0, 0, 0, 0, 0, 0,
    6499, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6498, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6497, 0, 6496, 6495, 0, 0, 6494, 6493, 0, 6492, 0, 0, 0,
    0, 6491, 6490, 0, 6489, 0, 0, 0, 6488, 0, 0, 0, 0, 0, 0, 0,
    0, 6487, 6486, 0, 6485, 0, 0, 0, 6484, 0, 0, 0, 0, 0, 0, 0,
    6483, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6482, 6481, 0, 6480, 0, 0, 0, 6479, 0, 0, 0, 0, 0, 0, 0,
    6478, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6477, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6476, 6475, 0, 6474, 0, 0, 0, 6473, 0, 0, 0, 0, 0, 0, 0,
    6472, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6471, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6470, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6469, 0, 0, 0, 6468, 0, 6467, 6466, 0,
    0, 0, 0, 6465, 0, 6464, 6463, 0, 0, 6462, 6461, 0, 6460, 0, 0, 0,
    0, 0, 0, 6459, 0, 6458, 6457, 0, 0, 6456, 6455, 0, 6454, 0, 0, 0,
    0, 6453, 6452, 0, 6451, 0, 0, 0, 6450, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6449, 0, 6448, 6447, 0, 0, 6446, 6445, 0, 6444, 0, 0, 0,
    0, 6443, 6442, 0, 6441, 0, 0, 0, 6440, 0, 0, 0, 0, 0, 0, 0,
    0, 6439, 6438, 0, 6437, 0, 0, 0, 6436, 0, 0, 0, 0, 0, 0, 0,
    6435, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6434, 0, 6433, 6432, 0, 0, 6431, 6430, 0, 6429, 0, 0, 0,
    0, 6428, 6427, 0, 6426, 0, 0, 0, 6425, 0, 0, 0, 0, 0, 0, 0,
    0, 6424, 6423, 0, 6422, 0, 0, 0, 6421, 0, 0, 0, 0, 0, 0, 0,
    6420, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6419, 6418, 0, 6417, 0, 0, 0, 6416, 0, 0, 0, 0, 0, 0, 0,
    6415, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6414, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6413, 0, 6412, 6411, 0, 0, 6410, 6409, 0, 6408, 0, 0, 0,
    0, 6407, 6406, 0, 6405, 0, 0, 0, 6404, 0, 0, 0, 0, 0, 0, 0,
    0, 6403, 6402, 0, 6401, 0, 0, 0, 6400, 0, 0, 0, 0, 0, 0, 0,
    6399, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6398, 6397, 0, 6396, 0, 0, 0, 6395, 0, 0, 0, 0, 0, 0, 0,
    6394, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6393, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6392, 6391, 0, 6390, 0, 0, 0, 6389, 0, 0, 0, 0, 0, 0, 0,
    6388, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6387, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6386, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6385, 0, 6384, 6383, 0, 0, 6382, 6381, 0, 6380, 0, 0, 0,
    0, 6379, 6378, 0, 6377, 0, 0, 0, 6376, 0, 0, 0, 0, 0, 0, 0,
    0, 6375, 6374, 0, 6373, 0, 0, 0, 6372, 0, 0, 0, 0, 0, 0, 0,
    6371, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6370, 6369, 0, 6368, 0, 0, 0, 6367, 0, 0, 0, 0, 0, 0, 0,
    6366, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6365, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6364, 6363, 0, 6362, 0, 0, 0, 6361, 0, 0, 0, 0, 0, 0, 0,
    6360, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6359, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6358, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6357, 6356, 0, 6355, 0, 0, 0, 6354, 0, 0, 0, 0, 0, 0, 0,
    6353, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6352, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6351, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6350, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 6349, 0, 0, 0, 6348, 0, 6347, 6346, 0,
    0, 0, 0, 6345, 0, 6344, 6343, 0, 0, 6342, 6341, 0, 6340, 0, 0, 0,
    0, 0, 0, 6339, 0, 6338, 6337, 0, 0, 6336, 6335, 0, 6334, 0, 0, 0,
    0, 6333, 6332, 0, 6331, 0, 0, 0, 6330, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6329, 0, 6328, 6327, 0, 0, 6326, 6325, 0, 6324, 0, 0, 0,
    0, 6323, 6322, 0, 6321, 0, 0, 0, 6320, 0, 0, 0, 0, 0, 0, 0,
    0, 6319, 6318, 0, 6317, 0, 0, 0, 6316, 0, 0, 0, 0, 0, 0, 0,
    6315, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6314, 0, 6313, 6312, 0, 0, 6311, 6310, 0, 6309, 0, 0, 0,
    0, 6308, 6307, 0, 6306, 0, 0, 0, 6305, 0, 0, 0, 0, 0, 0, 0,
    0, 6304, 6303, 0, 6302, 0, 0, 0, 6301, 0, 0, 0, 0, 0, 0, 0,
    6300, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6299, 6298, 0, 6297, 0, 0, 0, 6296, 0, 0, 0, 0, 0, 0, 0,
    6295, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6294, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6293, 0, 6292, 6291, 0, 0, 6290, 6289, 0, 6288, 0, 0, 0,
    0, 6287, 6286, 0, 6285, 0, 0, 0, 6284, 0, 0, 0, 0, 0, 0, 0,
    0, 6283, 6282, 0, 6281, 0, 0, 0, 6280, 0, 0, 0, 0, 0, 0, 0,
    6279, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6278, 6277, 0, 6276, 0, 0, 0, 6275, 0, 0, 0, 0, 0, 0, 0,
    6274, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6273, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6272, 6271, 0, 6270, 0, 0, 0, 6269, 0, 0, 0, 0, 0, 0, 0,
    6268, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6267, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6266, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6265, 0, 6264, 6263, 0, 0, 6262, 6261, 0, 6260, 0, 0, 0,
    0, 6259, 6258, 0, 6257, 0, 0, 0, 6256, 0, 0, 0, 0, 0, 0, 0,
    0, 6255, 6254, 0, 6253, 0, 0, 0, 6252, 0, 0, 0, 0, 0, 0, 0,
    6251, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6250, 6249, 0, 6248, 0, 0, 0, 6247, 0, 0, 0, 0, 0, 0, 0,
    6246, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6245, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6244, 6243, 0, 6242, 0, 0, 0, 6241, 0, 0, 0, 0, 0, 0, 0,
    6240, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6239, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6238, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6237, 6236, 0, 6235, 0, 0, 0, 6234, 0, 0, 0, 0, 0, 0, 0,
    6233, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6232, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6231, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6230, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 6229, 0, 6228, 6227, 0, 0, 6226, 6225, 0, 6224, 0, 0, 0,
    0, 6223, 6222, 0, 6221, 0, 0, 0, 6220, 0, 0, 0, 0, 0, 0, 0,
    0, 6219, 6218, 0, 6217, 0, 0, 0, 6216, 0, 0, 0, 0, 0, 0, 0,
    6215, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6214, 6213, 0, 6212, 0, 0, 0, 6211, 0, 0, 0, 0, 0, 0, 0,
    6210, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6209, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6208, 6207, 0, 6206, 0, 0, 0, 6205, 0, 0, 0, 0, 0, 0, 0,
    6204, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6203, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6202, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6201, 6200, 0, 6199, 0, 0, 0, 6198, 0, 0, 0, 0, 0, 0, 0,
    6197, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6196, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6195, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6194, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 6193, 6192, 0, 6191, 0, 0, 0, 6190, 0, 0, 0, 0, 0, 0, 0,
    6189, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6188, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6187, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    6186, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1600, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Adjustments for the [find_fast](super::five::find_fast) hash.
#[rustfmt::skip]
pub(crate) static HASH_ADJUST: [u16; 512] = [
    5634, 499, 2265, 7321, 7390, 110, 881, 30, 905, 897, 7677, 1425, 69, 6293, 8079, 161,
    4453, 5010, 3228, 7780, 6566, 7954, 680, 2250, 27, 1585, 728, 503, 4168, 1082, 560, 4521,
    1578, 1200, 2812, 2852, 5991, 7196, 10, 1268, 84, 1911, 7445, 7817, 1598, 5174, 657, 2661,
    3147, 6627, 3231, 3528, 505, 6842, 4243, 952, 3132, 441, 2782, 1036, 543, 5127, 757, 5297,
    725, 3181, 4904, 3272, 972, 1989, 4505, 6538, 2408, 2377, 5200, 5215, 144, 5086, 208, 273,
    1732, 3168, 3814, 2392, 3689, 774, 687, 2984, 20, 121, 2280, 7776, 419, 7532, 1305, 5126,
    1795, 4669, 600, 1645, 4225, 7289, 1937, 7994, 3214, 4282, 6654, 392, 2018, 1945, 3662, 3677,
    1033, 4076, 2030, 5891, 7497, 3285, 3177, 370, 5702, 2285, 151, 2195, 544, 3900, 3157, 3650,
    2841, 6574, 402, 4167, 2654, 2883, 7237, 7531, 3013, 2018, 5144, 3849, 6099, 7399, 6997, 1851,
    3052, 1224, 562, 555, 2490, 7361, 788, 1032, 585, 2381, 7496, 1991, 3280, 7713, 3049, 860,
    2571, 6067, 2438, 5043, 4019, 3543, 3318, 2655, 7593, 5694, 5033, 2781, 2760, 6676, 368, 1251,
    5664, 1873, 4075, 630, 918, 8101, 4633, 485, 3103, 7224, 886, 1646, 3982, 3279, 2408, 1555,
    5487, 447, 2070, 2883, 6903, 446, 1536, 3967, 384, 684, 103, 181, 53, 5106, 2233, 310,
    5579, 627, 5114, 384, 768, 2478, 2006, 1328, 114, 226, 1068, 2930, 6103, 3462, 88, 558,
    3463, 6558, 2355, 3395, 3753, 7170, 2249, 7072, 2284, 2519, 5600, 1466, 5808, 784, 619, 2209,
    2668, 6524, 5290, 6022, 4206, 1141, 655, 6075, 5495, 3258, 2531, 927, 4945, 1402, 3930, 1782,
    1859, 2061, 3517, 419, 410, 2959, 1922, 2311, 740, 2106, 1070, 8004, 7825, 9, 5653, 4872,
    3293, 7841, 7606, 2247, 6825, 403, 1127, 4009, 2328, 1856, 77, 1355, 3762, 303, 8144, 6756,
    3807, 6057, 2176, 3856, 5212, 947, 3028, 801, 7388, 2320, 2061, 5108, 1480, 2073, 2779, 1773,
    6816, 2902, 2527, 6632, 834, 215, 1926, 3951, 2196, 2688, 7458, 4636, 3204, 2287, 8039, 3034,
    1862, 6176, 2990, 1784, 3772, 1226, 1607, 5196, 440, 2549, 4411, 99, 4843, 4834, 421, 6611,
    5583, 3503, 1708, 2034, 2230, 8045, 2546, 4334, 2188, 6890, 4049, 6943, 4248, 1948, 5295, 5282,
    2205, 7925, 7873, 2000, 2292, 312, 7114, 4610, 4329, 2147, 2226, 574, 5442, 5267, 6517, 2640,
    5921, 2353, 800, 6784, 7940, 5114, 7215, 2959, 2165, 3146, 2649, 1714, 2944, 3675, 3274, 6173,
    4044, 1006, 1525, 1778, 3408, 2530, 33, 2458, 3035, 2990, 4527, 4033, 3926, 689, 388, 4017,
    3899, 1510, 2022, 197, 5095, 1750, 255, 211, 1391, 2582, 2843, 5578, 3886, 1432, 1082, 1602,
    363, 7676, 299, 1337, 3555, 1926, 45, 723, 2610, 2011, 3223, 5097, 3476, 3926, 5690, 16,
    3161, 1363, 4258, 6171, 5413, 1933, 136, 423, 954, 5516, 2016, 2604, 638, 1695, 591, 6109,
    3738, 927, 3688, 3129, 578, 7149, 4202, 4288, 4069, 1593, 6021, 7704, 415, 4072, 3706, 5564,
    6875, 4487, 981, 4403, 2415, 6650, 2343, 109, 1942, 7646, 3054, 802, 5108, 5220, 2115, 2908,
    2856, 1842, 148, 4124, 4624, 710, 2505, 2828, 4640, 1434, 46, 4356, 1273, 1175, 3717, 4031,
    2249, 3041, 431, 5390, 7367, 7757, 2819, 1627, 4590, 5932, 1056, 1368, 1772, 48, 6248, 2217,
];

/// Scores for hands with paired ranks indexed by the prime product hash.
#[rustfmt::skip]
pub(crate) static HASH_VALUES: [u16; 8192] = [
    271, 18, 157, 6060, 128, 203, 101, 1923, 196, 127, 39, 5707, 1730, 106, 1888, 81,
    158, 166, 3292, 1874, 292, 25, 245, 3238, 1759, 14, 205, 5788, 4777, 5888, 4864, 161,
    2349, 33, 70, 5962, 5800, 19, 3745, 123, 2105, 2393, 243, 234, 3232, 1652, 248, 66,
    11, 1623, 2432, 1829, 1820, 56, 1890, 2007, 149, 21, 190, 1720, 181, 47, 165, 1640,
    140, 48, 2031, 2373, 273, 2442, 1667, 2735, 2228, 141, 5044, 215, 59, 1729, 1939, 5829,
    6033, 2343, 159, 3260, 5405, 295, 304, 294, 241, 1965, 6146, 1635, 2344, 1831, 5519, 4331,
    1852, 1618, 77, 6143, 5766, 5399, 2388, 2311, 2258, 103, 133, 1737, 2459, 96, 6086, 276,
    1947, 15, 1621, 3287, 135, 85, 1908, 5064, 3125, 3602, 51, 2327, 227, 5861, 290, 3297,
    1828, 1620, 1699, 55, 2826, 16, 5930, 5735, 3052, 240, 1709, 4988, 1811, 27, 107, 1639,
    1702, 87, 1751, 5667, 52, 114, 2632, 305, 5679, 2079, 2407, 5727, 263, 5589, 5973, 2716,
    2587, 2237, 13, 1941, 174, 4701, 6058, 1790, 112, 100, 1689, 5489, 4560, 5650, 5220, 37,
    5939, 5880, 2265, 4182, 244, 1925, 281, 5499, 206, 5390, 142, 2096, 2184, 1654, 2141, 1980,
    3665, 2627, 1671, 2567, 2471, 5254, 284, 5976, 4310, 3209, 1887, 136, 42, 250, 2898, 5515,
    6165, 1802, 2133, 1686, 2671, 4427, 307, 5047, 2321, 4919, 5678, 4128, 2234, 2188, 2021, 2313,
    1655, 3678, 3763, 3835, 111, 5552, 1688, 4799, 61, 4796, 1788, 1681, 5812, 6178, 2887, 1662,
    5007, 162, 6174, 5792, 5717, 177, 191, 152, 2763, 5265, 156, 5903, 71, 1739, 259, 75,
    320, 2461, 1665, 3518, 1724, 6047, 2294, 63, 179, 170, 5505, 2127, 1683, 268, 5980, 3226,
    3067, 5140, 2243, 40, 2521, 5967, 3370, 4845, 2436, 218, 3783, 1727, 6169, 197, 1823, 3073,
    4600, 139, 58, 194, 5702, 36, 3591, 1629, 2235, 1926, 1728, 1968, 3931, 4366, 1851, 1882,
    2573, 2713, 3435, 4641, 297, 3720, 1886, 67, 5246, 2251, 4160, 5423, 1658, 5424, 5217, 57,
    1645, 62, 5696, 1797, 4405, 2919, 211, 283, 3228, 5977, 3607, 5618, 1775, 24, 1819, 95,
    3049, 4858, 5608, 4614, 5136, 3990, 5673, 1946, 4449, 3190, 3153, 2604, 2470, 5263, 4030, 5576,
    1978, 1784, 5923, 3881, 4899, 5961, 5691, 5901, 1855, 3146, 6114, 6039, 44, 4883, 3384, 2571,
    45, 2654, 2685, 3240, 2261, 5826, 5943, 73, 6028, 3731, 3296, 4676, 182, 31, 193, 5954,
    3441, 64, 4525, 84, 5915, 2194, 4042, 225, 2408, 3867, 2698, 4841, 5550, 5369, 90, 4334,
    3504, 4403, 3599, 4210, 4870, 26, 1901, 6029, 1795, 1719, 1769, 2144, 4619, 3997, 5791, 232,
    2363, 2047, 5149, 5965, 187, 1808, 2227, 5855, 4522, 1642, 6015, 315, 23, 4879, 5883, 2672,
    2435, 22, 1791, 5345, 2399, 4847, 2350, 5752, 2769, 4119, 1725, 3679, 3179, 2274, 2452, 4685,
    2782, 4750, 1663, 1873, 3616, 1907, 2867, 2595, 3982, 1641, 2276, 3744, 2318, 3000, 3197, 1895,
    252, 4532, 5175, 3535, 3972, 2372, 5383, 4301, 2476, 3320, 5703, 2328, 1844, 4315, 2594, 3614,
    5283, 4662, 5762, 3809, 2977, 5820, 3307, 5693, 1943, 2900, 6059, 2122, 5245, 1614, 68, 5772,
    5040, 6070, 3016, 5124, 1773, 5570, 5807, 4794, 5219, 2986, 2951, 2771, 301, 4383, 3375, 247,
    5242, 2430, 1624, 6030, 1714, 2115, 74, 5638, 5406, 312, 6002, 309, 6003, 2466, 163, 4232,
    4252, 1897, 3653, 278, 3323, 1922, 1912, 126, 2382, 316, 285, 3423, 116, 2174, 3885, 155,
    1647, 198, 1627, 308, 1871, 3994, 202, 3207, 160, 269, 54, 1877, 1910, 5876, 5491, 5998,
    5628, 1646, 2464, 2431, 0, 4246, 2417, 1745, 6012, 2941, 3961, 3831, 2428, 4981, 2600, 5350,
    5062, 2073, 173, 4584, 277, 5111, 86, 5308, 289, 3719, 2812, 4023, 3554, 145, 3210, 2225,
    2456, 5096, 1710, 2411, 6063, 4902, 2791, 1656, 1682, 2614, 183, 4197, 2211, 4825, 2253, 4074,
    2841, 2371, 5480, 4722, 5558, 2359, 3617, 5333, 3765, 270, 2005, 3741, 1953, 1927, 4966, 3445,
    2325, 180, 2315, 5323, 5548, 2412, 2433, 1690, 1825, 2846, 2499, 2269, 249, 185, 97, 1866,
    5852, 3198, 5408, 50, 208, 4506, 4528, 1957, 5238, 2825, 1735, 2477, 2082, 3870, 2434, 3628,
    4637, 0, 5080, 3869, 5093, 1687, 4547, 4669, 3660, 5386, 148, 5304, 1758, 2057, 2019, 82,
    4065, 89, 2674, 1711, 1650, 5587, 49, 2203, 3003, 6162, 5573, 175, 5071, 3195, 2080, 2155,
    5494, 1849, 6027, 4219, 2785, 115, 1928, 164, 5291, 6081, 2241, 5389, 4714, 2680, 5575, 1991,
    319, 5917, 3864, 1996, 2775, 150, 3077, 3061, 2687, 2563, 3168, 5285, 2304, 5737, 1685, 5879,
    4724, 5142, 3988, 5294, 1660, 0, 35, 4248, 12, 2209, 5619, 91, 1872, 4289, 221, 3446,
    0, 3262, 3537, 5837, 4716, 2233, 5544, 1848, 3274, 2450, 6079, 4642, 2569, 4189, 5577, 3278,
    1924, 296, 2779, 120, 72, 5674, 5572, 5929, 5029, 6061, 4274, 2220, 1807, 2623, 3371, 1672,
    2748, 53, 5401, 0, 3066, 4158, 2924, 5231, 2025, 2655, 5905, 5043, 172, 4169, 29, 6138,
    1643, 1955, 4965, 2954, 0, 4338, 3139, 0, 291, 4106, 3098, 2804, 3708, 4154, 5290, 3216,
    0, 2848, 3447, 5329, 5268, 1809, 5692, 4244, 5795, 2998, 5076, 2950, 5371, 2742, 6175, 5344,
    5431, 6176, 3059, 4705, 2175, 3529, 1870, 6112, 2975, 4852, 5912, 1997, 6074, 2437, 2447, 3215,
    168, 5694, 5510, 2823, 2579, 2589, 5873, 5985, 4817, 3012, 5332, 5393, 4490, 5932, 3962, 2273,
    5413, 2159, 1697, 3626, 2317, 5228, 2784, 3185, 2224, 4250, 4913, 2245, 5402, 0, 5357, 2248,
    5610, 0, 4586, 5297, 3759, 1774, 1963, 2197, 4997, 0, 5728, 5355, 0, 5640, 4556, 3852,
    5821, 2050, 2121, 5500, 3361, 3539, 1619, 3035, 5453, 0, 0, 6020, 5981, 1780, 4205, 4806,
    2347, 2298, 1670, 5710, 5179, 2560, 3286, 1945, 1961, 5104, 4311, 5183, 1721, 5783, 5375, 6141,
    4996, 2362, 2495, 2429, 5524, 3472, 4717, 4413, 5723, 5595, 78, 5457, 5796, 3381, 2444, 184,
    2404, 2457, 2455, 3727, 2351, 2405, 5318, 1843, 6150, 5804, 3534, 1950, 5739, 5560, 5230, 1815,
    0, 43, 5845, 4425, 5017, 2365, 4840, 2013, 3273, 6004, 3890, 5094, 4255, 3227, 5099, 2767,
    3893, 2173, 2845, 5450, 0, 4581, 4330, 3056, 0, 0, 2759, 3126, 28, 3668, 217, 0,
    216, 2717, 3889, 5832, 4472, 3017, 5902, 5395, 2515, 236, 3277, 3321, 0, 4863, 3212, 5190,
    5379, 2999, 3230, 2847, 6158, 5470, 3542, 3981, 0, 5769, 104, 5039, 5863, 5272, 4265, 4558,
    2443, 4435, 0, 2918, 2440, 4218, 0, 6038, 3107, 4622, 3301, 3401, 3333, 5568, 4907, 5672,
    4670, 4909, 3970, 4221, 4807, 0, 1989, 4376, 5646, 0, 3634, 1762, 1634, 0, 4859, 5087,
    171, 5490, 5627, 4110, 1666, 3946, 0, 0, 5068, 0, 3192, 272, 5215, 3985, 1748, 4576,
    4433, 2370, 0, 0, 6184, 0, 2355, 4738, 2624, 2992, 4454, 2395, 4740, 32, 4928, 5506,
    3836, 0, 0, 317, 5363, 0, 1779, 4025, 4924, 5613, 2023, 5077, 4055, 4692, 5313, 4150,
    0, 5317, 2303, 4677, 0, 0, 4844, 2172, 146, 3930, 4992, 130, 2603, 5279, 5364, 0,
    2544, 1984, 4509, 3560, 2502, 0, 4689, 3184, 3770, 1981, 2894, 2134, 4790, 6075, 3595, 0,
    0, 0, 0, 2582, 5846, 2837, 3739, 5394, 1806, 3425, 2774, 0, 4848, 258, 3422, 3871,
    3140, 5325, 5097, 0, 4079, 3008, 2378, 3063, 5226, 5432, 30, 2009, 99, 5758, 0, 1736,
    2709, 4801, 5726, 5540, 4634, 2065, 5777, 0, 1975, 2479, 4017, 4146, 5592, 2401, 5895, 5273,
    4362, 5647, 0, 3247, 3659, 4773, 4875, 6069, 1678, 0, 5516, 3088, 4446, 5793, 4896, 2192,
    4837, 0, 3486, 1883, 4585, 5546, 2537, 3155, 4448, 2279, 0, 0, 1958, 4121, 3191, 0,
    1835, 3082, 2114, 2014, 3925, 0, 3950, 0, 5252, 3346, 2106, 2038, 2794, 2268, 2923, 3820,
    2878, 3861, 1838, 1718, 3492, 4999, 2427, 4985, 4853, 3180, 4445, 6167, 4851, 2820, 4846, 2901,
    2913, 5989, 0, 3038, 6183, 3167, 5046, 4735, 1977, 5886, 0, 5498, 2157, 147, 6048, 4354,
    5460, 0, 287, 4830, 3318, 1798, 2484, 0, 5280, 0, 5264, 2765, 0, 5327, 2815, 0,
    5814, 3934, 4583, 0, 2107, 2143, 2250, 0, 0, 0, 3312, 2902, 3919, 0, 0, 5426,
    4695, 2889, 3547, 2111, 5621, 5138, 3142, 0, 5658, 0, 5448, 1712, 1884, 4765, 0, 17,
    0, 0, 2257, 1952, 0, 0, 0, 2099, 4890, 298, 0, 4263, 0, 6085, 2059, 1967,
    6023, 4101, 1659, 0, 2458, 0, 6156, 5014, 3593, 5626, 5975, 2868, 5931, 2596, 3673, 3158,
    5026, 20, 4882, 2909, 3918, 3661, 0, 3702, 2180, 5467, 3840, 0, 4732, 1896, 4553, 5066,
    3172, 5059, 3468, 5475, 5882, 1661, 3070, 5995, 3057, 1691, 4615, 0, 2449, 1898, 0, 3213,
    2792, 5016, 1626, 3832, 5999, 4653, 5396, 4004, 5163, 5360, 3942, 5484, 3752, 2267, 122, 5056,
    0, 151, 3169, 2162, 2212, 4923, 0, 2803, 4687, 4186, 4059, 4073, 5798, 2683, 2660, 5236,
    0, 3733, 5986, 3704, 0, 3028, 4253, 0, 2896, 0, 4339, 282, 0, 4476, 2547, 3276,
    3164, 5284, 1830, 1960, 4116, 6044, 1803, 5404, 0, 0, 5523, 0, 3960, 2003, 0, 5441,
    1842, 0, 2110, 0, 6172, 2160, 3310, 3875, 5487, 5008, 0, 0, 2410, 5624, 0, 2360,
    5878, 3568, 60, 0, 3583, 1995, 0, 2503, 3691, 5177, 0, 5022, 3285, 1752, 3561, 4775,
    0, 4437, 5887, 3042, 2266, 0, 0, 0, 5216, 2851, 3134, 4299, 0, 5970, 2916, 2081,
    0, 5926, 6098, 1936, 5092, 0, 2386, 5661, 0, 0, 4295, 0, 2811, 3619, 1698, 4573,
    4908, 5380, 0, 3630, 0, 3481, 5024, 4174, 5706, 0, 5084, 4325, 0, 3094, 5240, 3449,
    3407, 255, 2034, 4123, 4598, 5427, 4474, 2570, 2366, 6177, 6173, 2482, 3872, 1706, 5443, 2230,
    2129, 2424, 4401, 0, 5351, 4475, 4885, 3955, 0, 2290, 275, 119, 0, 5053, 4664, 5794,
    2254, 2576, 2641, 0, 1787, 6131, 3237, 3707, 4505, 3798, 5670, 110, 201, 2599, 0, 2718,
    3855, 3266, 3487, 2795, 5073, 2361, 5940, 0, 6115, 2749, 3671, 5370, 4618, 2406, 3465, 0,
    3338, 4480, 5554, 3421, 4356, 2403, 4039, 5211, 322, 5645, 0, 0, 2545, 5255, 4238, 0,
    0, 1625, 4385, 3075, 6052, 0, 2884, 4963, 0, 2288, 4631, 4001, 5105, 0, 0, 5683,
    5208, 4415, 4990, 3818, 4681, 3034, 2518, 65, 0, 5118, 0, 4986, 4436, 3868, 4358, 4747,
    0, 2634, 4491, 2151, 3499, 0, 2897, 0, 1674, 4550, 2605, 4712, 2330, 1644, 0, 0,
    0, 0, 0, 3688, 5067, 3233, 2838, 3754, 0, 0, 0, 3251, 0, 5904, 4551, 302,
    6140, 2286, 4741, 5166, 4463, 125, 5952, 214, 2752, 5767, 0, 2670, 3903, 3479, 3205, 3208,
    0, 2147, 1649, 1935, 4994, 3674, 4929, 4168, 0, 5988, 5478, 2292, 5750, 4867, 3055, 0,
    0, 310, 204, 4788, 3436, 0, 4742, 5180, 0, 4984, 4983, 3928, 3957, 0, 0, 4304,
    0, 4921, 3657, 5813, 1885, 0, 3147, 0, 3424, 5521, 3812, 3218, 4307, 2861, 4957, 5341,
    0, 0, 1932, 4424, 5412, 0, 80, 2936, 0, 5202, 5747, 1938, 2020, 5074, 0, 314,
    4693, 2876, 132, 3068, 0, 0, 2302, 3959, 5486, 0, 4726, 0, 3342, 3565, 5598, 0,
    5615, 5065, 3801, 4493, 3641, 3706, 0, 0, 2108, 4668, 1956, 3257, 5964, 6031, 5212, 0,
    1944, 5719, 3045, 5132, 0, 0, 2764, 4683, 0, 3319, 4820, 4360, 4702, 4191, 0, 4980,
    0, 0, 3594, 1761, 3353, 3728, 5641, 2552, 5391, 0, 5321, 4035, 1858, 2856, 4993, 2496,
    4941, 5836, 4138, 5449, 4876, 265, 5721, 0, 1859, 2580, 0, 4884, 2380, 4500, 3365, 4782,
    0, 4368, 0, 4410, 0, 5353, 4821, 4102, 0, 3860, 2524, 0, 2835, 1921, 5884, 4076,
    0, 3815, 4145, 0, 0, 254, 4129, 0, 2651, 2168, 0, 2217, 0, 2796, 5567, 3797,
    4725, 1880, 0, 2275, 0, 5643, 3572, 0, 0, 1841, 3956, 0, 1836, 3129, 1717, 4569,
    1994, 41, 3863, 5850, 3999, 3631, 3372, 5574, 0, 2972, 3650, 5435, 4529, 4520, 0, 3549,
    2872, 3658, 2985, 0, 92, 5192, 0, 3926, 0, 0, 143, 3303, 0, 3963, 3684, 2724,
    2198, 4212, 4514, 3601, 3576, 0, 3414, 260, 5819, 3587, 4800, 3261, 2695, 4402, 0, 0,
    0, 0, 0, 2684, 4208, 1741, 0, 0, 0, 5161, 2042, 2734, 4396, 3391, 3335, 0,
    3411, 5171, 0, 4326, 5729, 3225, 3341, 0, 5388, 2051, 0, 0, 3796, 4404, 5455, 1920,
    0, 2637, 0, 4719, 3509, 0, 5117, 3766, 1906, 2534, 5816, 0, 1822, 0, 0, 4019,
    2574, 5376, 3358, 0, 4571, 0, 4211, 5296, 5314, 3448, 2833, 3219, 4804, 3772, 4432, 4822,
    5620, 2726, 6093, 6142, 0, 2609, 3149, 3642, 0, 4769, 6006, 5612, 3272, 0, 1731, 2341,
    0, 0, 0, 1969, 2320, 0, 0, 5642, 4118, 5759, 0, 1857, 0, 0, 4605, 2700,
    4496, 2326, 2693, 0, 3825, 5664, 3177, 5507, 3543, 0, 5458, 5126, 300, 0, 0, 5258,
    1704, 5034, 2146, 0, 5102, 0, 3493, 3923, 5207, 0, 0, 0, 0, 5822, 0, 0,
    2939, 306, 0, 3976, 4026, 3686, 6148, 4973, 5147, 3224, 3267, 0, 3648, 4093, 1786, 1615,
    4497, 4958, 0, 3072, 2055, 4114, 2383, 6110, 5938, 0, 3922, 0, 0, 5416, 5206, 6123,
    2783, 3954, 3806, 0, 5602, 0, 2686, 2818, 0, 4542, 5953, 1692, 5551, 3187, 0, 4785,
    3935, 3485, 3101, 4298, 5020, 4139, 6045, 3644, 0, 0, 2358, 1804, 4736, 3091, 83, 137,
    3588, 5579, 1934, 3605, 0, 0, 2969, 5027, 5164, 0, 4644, 2272, 2657, 2912, 2821, 124,
    0, 4710, 6034, 4795, 5042, 2048, 5835, 5415, 3456, 318, 5078, 251, 5941, 4636, 0, 0,
    3730, 4057, 2453, 4162, 5925, 1722, 0, 5909, 0, 5018, 2301, 231, 5730, 4406, 5367, 4027,
    5141, 0, 5697, 3773, 4262, 93, 2866, 0, 6001, 1812, 4779, 3850, 4395, 2772, 3206, 2996,
    6009, 3376, 0, 2415, 5860, 1865, 4134, 4075, 4470, 5194, 2669, 94, 288, 0, 4319, 2156,
    1904, 4541, 2006, 223, 5785, 3952, 1868, 3907, 5165, 0, 2485, 2338, 0, 3332, 2703, 3615,
    4313, 2732, 2528, 4549, 3834, 2148, 4483, 3170, 4915, 2364, 2223, 3419, 2125, 192, 5749, 0,
    4545, 2199, 0, 4012, 0, 4562, 2696, 1987, 3457, 2997, 0, 0, 0, 3183, 2639, 238,
    0, 4995, 3646, 5397, 1933, 0, 4245, 2112, 0, 3989, 0, 0, 4778, 1992, 178, 0,
    4645, 0, 2729, 2336, 3742, 5250, 0, 6155, 0, 0, 4523, 5597, 0, 2800, 3130, 2263,
    3902, 219, 34, 0, 0, 5019, 5675, 2625, 4797, 5251, 5773, 2635, 5853, 233, 230, 0,
    2740, 2952, 5531, 5582, 5241, 3114, 5002, 2675, 3395, 4612, 0, 0, 3874, 2968, 5182, 0,
    4140, 5326, 5463, 3629, 0, 3064, 3309, 3622, 3580, 4836, 2000, 5833, 3814, 4122, 0, 0,
    4333, 0, 6125, 0, 0, 0, 5319, 5991, 6019, 4620, 2381, 2491, 121, 5966, 2648, 5095,
    2636, 0, 2932, 2553, 0, 4947, 3567, 5069, 4381, 5114, 2060, 2312, 2278, 0, 3380, 0,
    2691, 189, 5336, 5373, 0, 0, 2314, 134, 2628, 2119, 0, 0, 0, 2356, 3522, 4808,
    4047, 5740, 0, 0, 0, 3429, 2098, 6133, 2335, 5156, 3243, 4942, 3856, 0, 0, 0,
    0, 6010, 4633, 4028, 0, 0, 5354, 0, 0, 3399, 0, 5763, 4089, 3196, 0, 0,
    0, 2167, 0, 0, 0, 3163, 2070, 2064, 0, 0, 4792, 0, 0, 311, 0, 0,
    6116, 0, 153, 4015, 0, 0, 5293, 0, 4607, 4772, 3649, 2927, 0, 2323, 5200, 5428,
    2745, 4038, 0, 3740, 5320, 0, 0, 5631, 6035, 3898, 0, 5666, 0, 0, 2200, 5681,
    6105, 3123, 4416, 1694, 0, 4906, 4300, 3290, 0, 2893, 1750, 2863, 2906, 0, 3015, 5535,
    0, 0, 0, 0, 2109, 5565, 4353, 0, 4254, 4412, 3848, 0, 0, 3663, 2911, 5070,
    3908, 3109, 0, 4561, 0, 6179, 4391, 4770, 3221, 2773, 3551, 3520, 1628, 1976, 0, 0,
    3253, 0, 4438, 0, 0, 4132, 5588, 2331, 0, 0, 2738, 1903, 0, 5787, 2787, 0,
    0, 0, 154, 0, 6018, 0, 3491, 1911, 3007, 5809, 5168, 0, 2421, 0, 0, 2584,
    4930, 213, 3723, 5632, 2550, 3905, 0, 2252, 0, 2829, 4594, 6024, 0, 2844, 6106, 3282,
    3643, 6163, 0, 0, 0, 5655, 4006, 1942, 0, 3833, 0, 4204, 4226, 4678, 6132, 0,
    5501, 6151, 3873, 5637, 0, 2374, 0, 1783, 1653, 5892, 3311, 1673, 0, 2880, 4516, 0,
    0, 2827, 226, 5468, 5974, 118, 6170, 6077, 2145, 0, 2283, 0, 4649, 4270, 6134, 0,
    4546, 0, 0, 0, 3705, 0, 0, 4117, 0, 0, 0, 0, 0, 0, 0, 2207,
    5908, 2239, 0, 4874, 5865, 4534, 4674, 2805, 4577, 0, 3664, 3288, 5811, 0, 2692, 0,
    2413, 0, 2124, 4296, 0, 6037, 3106, 4097, 2481, 0, 2581, 2531, 0, 3506, 2824, 4188,
    2247, 0, 0, 4005, 5656, 3027, 4229, 3559, 5037, 4787, 0, 0, 5604, 5508, 0, 3166,
    0, 6046, 280, 0, 4281, 0, 4423, 5856, 2852, 2907, 1630, 3223, 5249, 4978, 5900, 1675,
    2193, 303, 0, 1826, 0, 4111, 2414, 0, 6103, 5135, 5869, 4053, 4286, 3412, 0, 4663,
    2123, 4602, 0, 3810, 4499, 0, 5035, 0, 0, 0, 0, 5209, 6026, 5075, 4126, 4862,
    3637, 5894, 3102, 4866, 1738, 3157, 5784, 4513, 0, 0, 4812, 6135, 2101, 6161, 1732, 5488,
    2836, 3025, 3271, 2163, 4142, 5539, 5843, 0, 0, 2448, 3975, 0, 5881, 2871, 2240, 1881,
    6057, 2676, 0, 4241, 0, 3161, 3662, 0, 0, 4842, 3284, 0, 3181, 5877, 3823, 5237,
    5072, 1951, 4621, 0, 0, 2400, 3024, 5503, 3264, 0, 3093, 220, 0, 6129, 0, 3516,
    2196, 3362, 4998, 2126, 4361, 3432, 5038, 3060, 5979, 5748, 0, 5131, 4269, 3603, 4341, 6053,
    0, 0, 199, 2032, 0, 3182, 3268, 0, 1949, 3086, 2353, 0, 4752, 5311, 5686, 2438,
    2697, 4261, 0, 1937, 4688, 5001, 0, 2284, 3090, 3156, 0, 3080, 2118, 5224, 5704, 0,
    5172, 5949, 0, 3735, 0, 3842, 3431, 3189, 2987, 5525, 4517, 4217, 6082, 3780, 0, 3948,
    4447, 4328, 5483, 2056, 5859, 5936, 0, 5688, 4658, 0, 3519, 5090, 5677, 0, 6005, 0,
    0, 3887, 4616, 293, 4107, 4239, 2308, 4768, 4167, 0, 5593, 0, 3128, 4297, 5434, 4764,
    5563, 5266, 5496, 3026, 5687, 3758, 6068, 0, 1964, 0, 4751, 0, 4348, 4003, 0, 5562,
    0, 0, 0, 4336, 3252, 0, 0, 5083, 0, 5456, 0, 2299, 0, 3530, 5580, 2973,
    5511, 0, 3826, 4201, 5663, 5157, 5732, 2176, 0, 4034, 3608, 4329, 0, 0, 5324, 0,
    2306, 4373, 4597, 1657, 3891, 3336, 3105, 3199, 5205, 3074, 3398, 0, 0, 4393, 0, 2617,
    3586, 5025, 5870, 3750, 4897, 0, 1756, 3349, 5398, 5420, 5210, 4010, 5823, 0, 5137, 2953,
    2519, 5806, 2517, 0, 2903, 0, 2578, 0, 0, 0, 3984, 2028, 4624, 5414, 2991, 0,
    1982, 3811, 3385, 0, 1746, 0, 0, 3111, 0, 0, 2766, 0, 0, 0, 4592, 6185,
    0, 2277, 5061, 2974, 0, 2068, 0, 1971, 0, 0, 4728, 3746, 0, 2295, 5978, 4419,
    4399, 4709, 4931, 0, 2948, 0, 4839, 1839, 4889, 0, 105, 4213, 5028, 0, 0, 0,
    5712, 0, 0, 6022, 2598, 5181, 5359, 0, 5633, 5545, 5566, 2181, 3444, 1929, 0, 5983,
    5517, 0, 5227, 0, 0, 3476, 3466, 0, 5193, 2541, 4260, 4655, 3246, 257, 0, 6071,
    0, 5868, 2602, 5184, 4609, 4340, 6102, 0, 2416, 0, 117, 0, 4040, 4739, 2420, 3289,
    0, 5543, 3910, 4452, 5771, 4185, 0, 129, 4414, 0, 4603, 3104, 5753, 0, 5797, 4264,
    0, 4377, 3204, 0, 5745, 4856, 0, 0, 0, 5889, 0, 3725, 3145, 0, 0, 1703,
    0, 5601, 0, 0, 3390, 0, 3511, 5922, 2797, 2255, 0, 4367, 4183, 4723, 0, 4950,
    2514, 4696, 0, 0, 2904, 0, 1633, 5403, 0, 3681, 0, 0, 2219, 4555, 0, 4067,
    4259, 3533, 4756, 4272, 5223, 4857, 5346, 2071, 0, 4918, 5023, 0, 0, 0, 3150, 3524,
    5063, 0, 212, 0, 0, 3112, 2961, 0, 5471, 4855, 0, 0, 4743, 0, 2260, 0,
    6119, 0, 2185, 2249, 6055, 4257, 5690, 0, 4694, 4031, 4007, 3482, 0, 3940, 0, 4754,
    6025, 4387, 2348, 2346, 3690, 0, 0, 0, 5005, 3279, 5288, 0, 0, 0, 0, 5765,
    0, 4504, 0, 2922, 4072, 6091, 2340, 0, 5108, 0, 3958, 0, 4133, 0, 4515, 0,
    6122, 0, 2899, 4352, 0, 6130, 0, 4456, 3378, 2332, 0, 2677, 3021, 0, 4086, 4363,
    2384, 2236, 5780, 4955, 3945, 0, 0, 0, 3047, 4588, 0, 2391, 0, 0, 0, 0,
    0, 5033, 5705, 0, 5048, 0, 0, 4595, 2776, 3354, 0, 2128, 5913, 4749, 0, 4868,
    3514, 5921, 4891, 0, 3550, 0, 0, 3030, 5282, 1676, 0, 4143, 186, 2040, 1705, 3345,
    3076, 0, 2135, 0, 0, 6040, 4643, 2394, 4292, 0, 2737, 0, 0, 4936, 3969, 4635,
    2035, 0, 5032, 2297, 0, 3363, 0, 3816, 2061, 0, 5139, 0, 1716, 2891, 0, 0,
    0, 0, 3186, 0, 0, 3119, 0, 5387, 3528, 0, 0, 4155, 3480, 0, 3699, 5338,
    0, 4964, 0, 0, 3014, 5410, 76, 4014, 5497, 3488, 5260, 0, 0, 5146, 4508, 0,
    0, 2721, 4548, 0, 4090, 3582, 0, 0, 0, 6166, 4022, 0, 5116, 1677, 0, 4727,
    2165, 0, 4613, 2526, 2955, 5021, 3541, 5036, 0, 3546, 5916, 2925, 3188, 2451, 4578, 5229,
    2505, 0, 2934, 5786, 0, 4163, 4640, 3442, 2620, 0, 0, 4713, 5154, 1796, 3843, 0,
    2707, 3495, 0, 0, 4626, 0, 0, 0, 3716, 4335, 4982, 5662, 3862, 6139, 4346, 262,
    6101, 0, 3113, 5477, 6080, 2822, 5277, 6017, 4617, 0, 3709, 3087, 2103, 0, 2246, 0,
    5553, 0, 0, 0, 0, 4834, 0, 0, 0, 3010, 4372, 0, 0, 4805, 0, 1948,
    3675, 0, 0, 4697, 3085, 2316, 0, 4389, 1940, 0, 3328, 0, 4240, 0, 5718, 4753,
    0, 0, 2993, 0, 3913, 0, 0, 0, 0, 5963, 5757, 0, 0, 2565, 2673, 0,
    4665, 4527, 5485, 5622, 0, 4378, 3483, 5555, 0, 5700, 6008, 4533, 0, 0, 4587, 2566,
    3454, 2786, 5668, 0, 0, 0, 0, 3578, 3897, 0, 3131, 2549, 0, 0, 2027, 4766,
    4061, 4088, 5409, 2828, 2354, 4469, 5689, 0, 0, 6097, 2533, 0, 0, 0, 0, 3203,
    5945, 4503, 6121, 0, 0, 5270, 3171, 0, 0, 3133, 1899, 4606, 3729, 0, 4898, 5362,
    0, 5372, 4623, 0, 0, 4512, 3805, 4920, 5052, 0, 0, 0, 5547, 5526, 0, 0,
    6054, 4153, 3394, 2793, 0, 0, 321, 2813, 3092, 2540, 2905, 0, 2586, 2153, 3460, 0,
    3141, 5776, 2522, 0, 2177, 0, 4733, 0, 6127, 3100, 5041, 0, 4141, 6036, 2908, 2062,
    6007, 4760, 3308, 4124, 1869, 3408, 4130, 195, 5010, 0, 0, 0, 0, 0, 0, 4838,
    0, 6042, 4202, 0, 3556, 1715, 0, 2232, 3173, 4943, 138, 235, 6095, 3316, 5736, 2914,
    3882, 4927, 3463, 5518, 2790, 0, 0, 5984, 2030, 5828, 3901, 0, 2483, 5578, 0, 256,
    4359, 4251, 4064, 3159, 3618, 0, 4225, 5098, 0, 0, 5031, 2187, 4178, 4464, 4539, 3781,
    0, 4228, 4120, 6144, 4317, 5256, 5857, 0, 3193, 167, 3118, 0, 6064, 0, 5599, 4892,
    5725, 0, 3998, 4020, 144, 5734, 5173, 0, 5920, 0, 3876, 0, 2490, 0, 3428, 4793,
    2994, 2802, 4190, 4734, 2799, 5831, 3878, 0, 4468, 0, 3433, 2063, 2092, 6168, 1854, 6180,
    0, 5698, 4036, 5392, 4277, 0, 0, 2154, 0, 4443, 5872, 3306, 3943, 5128, 6078, 0,
    0, 4698, 5532, 4094, 5262, 4081, 0, 2137, 4757, 2462, 4054, 2642, 5867, 4459, 6072, 4708,
    5446, 3202, 4431, 5969, 0, 4559, 0, 2202, 4544, 0, 0, 0, 3474, 0, 0, 1916,
    3265, 4759, 4488, 0, 0, 0, 0, 0, 1821, 4582, 0, 4949, 0, 3176, 0, 2088,
    0, 2984, 3896, 5081, 2296, 0, 0, 0, 3337, 0, 3461, 0, 5581, 0, 0, 0,
    2178, 0, 98, 2507, 0, 5148, 0, 1776, 5121, 5711, 0, 0, 0, 4968, 3966, 3838,
    5411, 3416, 3597, 0, 2086, 3360, 0, 0, 4690, 4703, 3037, 3917, 3490, 5993, 0, 3803,
    5529, 5347, 0, 5635, 0, 5586, 6137, 5197, 4080, 0, 2881, 0, 3570, 2285, 0, 0,
    3564, 0, 6050, 0, 5366, 5897, 0, 5648, 0, 3531, 2719, 0, 2039, 0, 3924, 3703,
    2751, 5295, 2554, 5185, 0, 0, 0, 4375, 0, 4510, 0, 0, 3787, 4175, 0, 5178,
    3768, 109, 5421, 3019, 3692, 5348, 2183, 4666, 1930, 2830, 4647, 3777, 3302, 0, 3120, 0,
    0, 5997, 5770, 0, 0, 5060, 2591, 0, 3124, 5349, 4960, 4478, 2633, 2645, 0, 2739,
    0, 4320, 0, 0, 5680, 3071, 0, 5538, 4209, 2305, 0, 0, 5433, 4991, 0, 3039,
    0, 0, 4869, 0, 5653, 0, 4660, 5893, 0, 0, 5972, 0, 0, 2988, 5269, 0,
    1918, 0, 2367, 0, 0, 0, 4444, 0, 3527, 2044, 5013, 2213, 4343, 4482, 3676, 5439,
    3201, 0, 3685, 0, 4294, 0, 0, 4651, 5151, 0, 3590, 0, 5343, 2043, 0, 0,
    0, 0, 3844, 0, 3344, 0, 0, 4258, 2910, 0, 0, 4285, 0, 5419, 0, 3339,
    5130, 0, 2231, 0, 5253, 0, 4349, 5004, 3802, 5919, 4989, 2630, 0, 4127, 1754, 4972,
    0, 4854, 1792, 5358, 4481, 0, 3505, 4455, 5946, 5465, 4394, 5910, 3048, 0, 0, 3712,
    0, 0, 2339, 5232, 4181, 3726, 6083, 4451, 0, 4085, 2131, 0, 0, 4568, 3036, 0,
    5682, 4048, 5733, 0, 2017, 4922, 2104, 1856, 5425, 3154, 0, 0, 0, 1708, 6171, 3949,
    0, 0, 0, 0, 0, 2608, 5891, 4976, 5429, 4147, 5201, 4593, 4926, 2875, 3178, 5665,
    0, 2539, 0, 0, 0, 3980, 6092, 4193, 5466, 0, 2319, 2689, 5445, 2206, 0, 4798,
    3756, 0, 4113, 4417, 2989, 2066, 0, 4316, 3523, 2874, 0, 0, 3200, 4745, 0, 2971,
    0, 3526, 2498, 2817, 5896, 5644, 0, 113, 0, 3136, 2862, 4656, 0, 3313, 0, 6100,
    0, 0, 0, 3666, 2551, 2885, 2189, 4737, 0, 0, 5244, 5119, 3386, 0, 3489, 3613,
    3415, 3909, 0, 0, 3174, 0, 0, 5636, 188, 4507, 1900, 0, 0, 2937, 0, 0,
    4095, 5239, 0, 5422, 5660, 2831, 3944, 0, 1747, 5927, 3315, 0, 4827, 0, 2895, 3771,
    4369, 0, 1695, 5955, 4408, 2139, 5808, 2960, 0, 1915, 0, 2216, 0, 0, 0, 2033,
    2008, 0, 0, 2195, 0, 0, 2473, 4099, 3701, 0, 0, 0, 5842, 0, 5444, 0,
    4002, 0, 0, 0, 0, 0, 2864, 5528, 0, 0, 4925, 3418, 5234, 2375, 4409, 5950,
    2201, 3294, 0, 0, 2084, 2597, 5091, 5307, 3609, 0, 4774, 2575, 0, 0, 0, 0,
    1905, 2869, 0, 0, 0, 4350, 0, 0, 0, 0, 0, 131, 2956, 0, 3767, 2186,
    0, 0, 0, 4092, 2244, 0, 4715, 0, 0, 0, 2593, 3971, 5278, 108, 0, 0,
    0, 0, 0, 3217, 0, 0, 0, 2930, 0, 0, 0, 0, 0, 0, 3888, 5330,
    0, 0, 5848, 0, 4748, 0, 0, 0, 0, 2761, 0, 0, 0, 0, 3743, 0,
    2568, 0, 2130, 38, 0, 2855, 2688, 3747, 0, 3033, 0, 4103, 4351, 0, 0, 0,
    0, 0, 0, 0, 3606, 5569, 0, 6021, 5079, 3627, 0, 0, 0, 5299, 0, 4554,
    4364, 0, 5699, 4783, 5120, 3409, 0, 0, 2510, 3682, 0, 0, 0, 0, 3544, 0,
    0, 3695, 0, 0, 3368, 1993, 0, 0, 1986, 2337, 5134, 1789, 0, 0, 0, 3430,
    0, 4959, 3841, 5956, 0, 1909, 4256, 4962, 5731, 3357, 5436, 2843, 0, 0, 0, 3044,
    224, 0, 0, 0, 2140, 3002, 3097, 0, 5775, 0, 2612, 4223, 0, 0, 1613, 3804,
    0, 0, 4657, 2712, 0, 0, 2943, 0, 0, 5233, 5169, 0, 0, 2190, 0, 4008,
    0, 3807, 0, 5462, 4661, 0, 0, 0, 6066, 0, 0, 0, 2376, 0, 3478, 0,
    5459, 3680, 0, 2747, 0, 0, 2756, 0, 4776, 1760, 0, 0, 3020, 0, 3383, 4207,
    0, 5512, 0, 0, 0, 0, 0, 3947, 0, 0, 0, 2049, 0, 0, 0, 0,
    0, 4758, 0, 5527, 0, 0, 0, 2962, 0, 4125, 3793, 0, 0, 2577, 0, 2011,
    6147, 3005, 3327, 0, 3503, 5418, 0, 0, 0, 4916, 0, 3828, 0, 0, 5671, 0,
    5596, 0, 0, 5824, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5585, 0,
    4324, 4421, 0, 0, 0, 5167, 0, 0, 3081, 0, 0, 4911, 0, 0, 0, 0,
    6153, 0, 0, 0, 0, 0, 0, 3083, 0, 0, 0, 0, 0, 0, 4537, 2983,
    2967, 0, 1612, 5440, 4018, 0, 3054, 0, 0, 0, 3978, 0, 0, 1785, 0, 0,
    0, 3471, 0, 0, 0, 0, 0, 0, 0, 0, 4177, 0, 0, 3938, 0, 0,
    0, 4278, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    266, 3585, 0, 0, 3757, 5222, 4563, 0, 3160, 0, 0, 0, 4784, 0, 0, 0,
    5504, 0, 0, 0, 4082, 4077, 6099, 0, 2029, 6062, 0, 3324, 4901, 0, 0, 2722,
    0, 0, 4762, 0, 2929, 0, 3751, 0, 2357, 5123, 0, 6096, 0, 0, 5906, 3165,
    5743, 0, 209, 0, 3434, 3194, 0, 4016, 3388, 0, 4849, 0, 0, 0, 0, 2205,
    0, 2182, 0, 0, 2508, 0, 0, 2389, 4610, 4987, 5958, 5639, 0, 0, 5799, 5054,
    2229, 2611, 0, 0, 0, 0, 0, 0, 6120, 3138, 2926, 1902, 0, 4946, 0, 0,
    0, 6108, 3496, 0, 5502, 4684, 0, 0, 4418, 0, 0, 0, 4886, 4833, 0, 0,
    0, 2164, 5109, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4611, 0, 3393,
    0, 0, 0, 6051, 0, 0, 4220, 3095, 0, 0, 4379, 0, 2708, 2138, 4045, 3455,
    0, 2618, 0, 0, 2089, 3540, 0, 5055, 0, 4815, 0, 0, 0, 0, 0, 3574,
    0, 0, 4312, 0, 1970, 2100, 4823, 0, 0, 2564, 0, 4227, 0, 4137, 2850, 0,
    0, 2883, 0, 0, 2094, 0, 2402, 0, 0, 0, 2398, 0, 0, 0, 2076, 5801,
    0, 0, 0, 0, 0, 4000, 0, 0, 0, 0, 0, 4944, 0, 6087, 0, 3700,
    0, 0, 0, 3508, 0, 5009, 5987, 0, 3270, 3214, 0, 0, 3275, 4802, 0, 2280,
    0, 0, 0, 4215, 0, 0, 0, 2933, 2345, 0, 0, 0, 2917, 0, 0, 0,
    0, 0, 2171, 3521, 0, 2966, 0, 2018, 6128, 0, 0, 0, 0, 3331, 2002, 0,
    0, 2743, 0, 0, 313, 0, 5875, 0, 0, 0, 0, 0, 4878, 0, 5196, 6013,
    0, 2789, 4721, 0, 0, 2546, 0, 5271, 0, 5948, 0, 0, 0, 5479, 5361, 0,
    3620, 0, 0, 0, 0, 3625, 0, 0, 2097, 2710, 0, 0, 1973, 0, 0, 0,
    0, 3248, 0, 0, 5744, 0, 5605, 0, 3347, 0, 0, 5607, 0, 4109, 2979, 0,
    0, 0, 0, 0, 3231, 2819, 0, 0, 0, 1742, 3397, 0, 0, 0, 3808, 0,
    4699, 2289, 0, 0, 3941, 3249, 5789, 0, 0, 0, 0, 0, 0, 4629, 5400, 0,
    0, 5473, 2085, 4135, 0, 0, 4203, 0, 5815, 0, 0, 4467, 0, 0, 2489, 3698,
    0, 4172, 0, 0, 0, 0, 0, 0, 0, 4969, 2478, 0, 0, 4029, 0, 4744,
    5536, 3654, 0, 0, 0, 0, 2078, 0, 1767, 3555, 0, 2658, 3122, 0, 0, 5862,
    3819, 0, 5630, 6014, 5187, 0, 0, 0, 0, 2069, 0, 1700, 6160, 222, 0, 5191,
    5384, 4318, 0, 1637, 0, 246, 0, 4502, 0, 0, 4945, 0, 0, 5127, 4540, 3410,
    0, 5684, 1801, 4686, 2780, 4786, 0, 2770, 3933, 5802, 4422, 0, 0, 0, 2116, 0,
    0, 3162, 0, 0, 2723, 0, 3799, 0, 0, 0, 4574, 0, 5133, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 1734, 0, 0, 0, 2221, 3510, 5768, 0, 0, 0,
    0, 0, 0, 2397, 0, 2090, 0, 3782, 0, 4604, 3078, 0, 0, 0, 4914, 0,
    0, 0, 0, 3405, 0, 4730, 5259, 0, 4165, 3964, 4105, 3096, 0, 0, 1669, 0,
    0, 2665, 3507, 0, 4152, 5365, 0, 0, 3800, 4293, 3639, 0, 0, 4458, 0, 0,
    0, 0, 0, 5851, 0, 2493, 0, 0, 0, 0, 2214, 5685, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5006, 0,
    0, 0, 0, 0, 3151, 0, 0, 6094, 2469, 0, 6016, 3079, 0, 4975, 3029, 1726,
    4479, 3470, 3760, 0, 3236, 0, 5385, 0, 0, 2662, 0, 4861, 0, 5534, 5839, 0,
    3749, 0, 0, 5188, 0, 0, 0, 0, 6149, 0, 0, 1917, 0, 2958, 0, 4457,
    5649, 0, 0, 2377, 0, 3851, 3006, 0, 4974, 0, 5629, 1876, 0, 0, 0, 0,
    0, 1979, 3857, 5907, 0, 0, 3569, 0, 1764, 0, 0, 3031, 5708, 4206, 4492, 0,
    0, 3813, 0, 4580, 0, 0, 0, 0, 5805, 2291, 0, 0, 0, 3356, 0, 0,
    0, 3632, 0, 0, 2543, 0, 5328, 0, 2170, 2832, 0, 0, 0, 0, 4388, 0,
    0, 0, 0, 0, 0, 0, 3512, 0, 0, 0, 0, 5287, 2282, 0, 4630, 0,
    0, 0, 2052, 0, 5374, 0, 0, 0, 0, 0, 3687, 5914, 0, 4819, 5871, 3827,
    0, 0, 0, 4156, 1894, 0, 3974, 0, 0, 5331, 4063, 0, 3645, 0, 0, 0,
    0, 0, 0, 0, 0, 1913, 0, 5754, 0, 5530, 0, 0, 0, 0, 0, 0,
    0, 0, 1753, 3640, 2854, 0, 4711, 2616, 0, 0, 0, 0, 0, 0, 1636, 0,
    0, 3951, 0, 3440, 0, 0, 3837, 0, 0, 4780, 0, 0, 0, 0, 0, 3791,
    5461, 1733, 3420, 5937, 3532, 3865, 0, 0, 0, 2888, 4880, 0, 0, 3558, 4877, 169,
    4288, 0, 5437, 4078, 4940, 1616, 5817, 0, 2287, 0, 0, 0, 5303, 1799, 4905, 0,
    0, 0, 0, 3377, 3242, 0, 4056, 2664, 0, 4273, 0, 5994, 0, 2548, 0, 0,
    4462, 0, 0, 0, 4024, 3785, 0, 5951, 4572, 0, 0, 1813, 0, 0, 0, 299,
    0, 0, 0, 0, 0, 5482, 3329, 0, 5990, 0, 0, 0, 2834, 2788, 0, 1668,
    4498, 2309, 3789, 5306, 0, 0, 3144, 1777, 69, 0, 0, 0, 2613, 0, 4442, 2808,
    2215, 0, 1891, 0, 0, 0, 4632, 3715, 0, 2486, 0, 0, 0, 2368, 3795, 4371,
    0, 0, 0, 0, 4314, 2324, 2976, 0, 2077, 4590, 0, 0, 0, 5924, 5015, 0,
    0, 0, 0, 0, 3761, 0, 5537, 4937, 3829, 0, 0, 2944, 2329, 2525, 0, 2865,
    5012, 0, 0, 0, 0, 0, 4032, 5522, 1816, 0, 0, 5509, 0, 0, 0, 0,
    5235, 5261, 0, 0, 0, 0, 1707, 0, 0, 0, 0, 2619, 0, 4536, 3343, 2646,
    0, 0, 0, 5858, 0, 3484, 0, 0, 0, 3784, 5778, 5107, 0, 5309, 0, 0,
    6104, 0, 0, 3552, 0, 0, 0, 0, 0, 5616, 4818, 3135, 0, 4912, 3299, 2727,
    0, 2506, 2714, 0, 0, 5841, 0, 0, 0, 0, 0, 0, 1814, 0, 4599, 2396,
    0, 6041, 0, 0, 0, 0, 1651, 0, 0, 0, 0, 0, 0, 0, 0, 1875,
    4173, 3295, 0, 6043, 3298, 0, 0, 0, 1879, 3222, 0, 0, 0, 5058, 3396, 4519,
    2777, 0, 0, 0, 0, 0, 3738, 0, 5761, 0, 0, 0, 0, 3604, 2425, 2920,
    0, 286, 0, 0, 2882, 0, 2271, 3557, 4487, 0, 5153, 0, 3847, 0, 0, 0,
    0, 0, 0, 4904, 0, 0, 0, 0, 3697, 4096, 0, 2942, 0, 2559, 3932, 0,
    1723, 0, 0, 4894, 0, 0, 5594, 4511, 3656, 3563, 0, 2218, 2798, 2877, 0, 2644,
    1800, 6154, 3245, 2072, 0, 0, 2981, 0, 4224, 2840, 0, 3403, 2938, 0, 4564, 3373,
    5942, 3348, 0, 3426, 0, 0, 0, 0, 0, 0, 3986, 0, 0, 0, 0, 1954,
    2487, 4495, 0, 0, 0, 0, 0, 5057, 3350, 2532, 0, 4824, 3498, 2678, 5301, 0,
    0, 5971, 4049, 2075, 0, 2222, 0, 2504, 2704, 5381, 0, 5155, 0, 0, 2762, 1713,
    3624, 0, 0, 4704, 0, 0, 3545, 2117, 0, 3229, 0, 0, 5657, 5992, 3598, 4865,
    0, 0, 0, 0, 0, 4441, 0, 3473, 0, 0, 0, 0, 0, 0, 0, 2441,
    0, 0, 4939, 2606, 0, 6182, 0, 4767, 4917, 0, 0, 2536, 0, 5088, 0, 0,
    0, 0, 3638, 0, 2016, 3993, 2010, 4302, 3737, 0, 0, 3936, 3721, 0, 0, 0,
    4648, 5378, 0, 0, 2468, 4171, 0, 0, 3920, 0, 2615, 0, 0, 0, 0, 2666,
    5885, 3283, 1744, 2659, 4832, 4881, 0, 2530, 0, 4956, 0, 3293, 5533, 0, 2592, 0,
    0, 2492, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2293, 2607, 3610, 3023, 0,
    0, 0, 0, 0, 2439, 0, 6109, 5803, 0, 2210, 3883, 5247, 0, 0, 0, 0,
    0, 0, 0, 0, 4465, 5810, 1765, 4521, 0, 3884, 0, 0, 0, 4565, 2513, 0,
    3853, 253, 5158, 2001, 5709, 0, 0, 4164, 5469, 239, 4283, 6117, 0, 3566, 0, 0,
    0, 3915, 0, 0, 5556, 3573, 2561, 0, 0, 4893, 2809, 4967, 0, 3009, 0, 0,
    0, 0, 0, 0, 0, 5818, 0, 1763, 0, 4112, 0, 0, 4650, 4961, 0, 4284,
    0, 0, 0, 0, 1638, 0, 5000, 0, 3110, 1684, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 242, 2583, 2226, 0, 0, 4344, 0, 0, 6088, 0, 4935, 3406, 0,
    0, 3013, 0, 4108, 0, 0, 0, 0, 3103, 0, 5603, 0, 2535, 5049, 2419, 2814,
    0, 0, 3004, 3241, 0, 3892, 5340, 0, 0, 0, 0, 5003, 5447, 4196, 2161, 2995,
    0, 0, 3895, 2681, 2859, 0, 0, 0, 2733, 176, 5442, 2022, 5214, 2621, 0, 2949,
    2778, 0, 0, 4397, 3710, 0, 0, 0, 1740, 1771, 0, 0, 0, 1889, 4771, 3667,
    6011, 0, 0, 2663, 3244, 0, 3979, 4066, 2990, 2699, 0, 0, 2270, 0, 0, 4386,
    3553, 1837, 0, 0, 4046, 0, 0, 4390, 4646, 0, 6073, 5101, 4332, 0, 0, 3880,
    2849, 0, 5756, 2494, 0, 5352, 0, 0, 0, 5276, 4970, 0, 6164, 5652, 3051, 0,
    4789, 2012, 0, 0, 0, 0, 0, 2890, 0, 0, 3886, 0, 4850, 0, 0, 0,
    0, 0, 1770, 0, 4426, 3968, 0, 3043, 0, 0, 0, 5474, 0, 0, 5189, 4461,
    0, 0, 0, 5847, 0, 4290, 3250, 4037, 0, 2093, 3317, 0, 0, 0, 0, 5996,
    0, 0, 3696, 2091, 0, 2816, 0, 3689, 2256, 0, 0, 1893, 5337, 0, 0, 0,
    2679, 2463, 2445, 2711, 4407, 2720, 0, 0, 4249, 3255, 2387, 2886, 0, 5849, 0, 0,
    0, 2418, 0, 0, 5934, 0, 3500, 0, 0, 0, 4803, 3879, 0, 0, 1846, 0,
    0, 2307, 3579, 0, 0, 4450, 0, 0, 0, 4860, 3967, 0, 1766, 3775, 2465, 4953,
    4305, 0, 3069, 261, 1610, 0, 2957, 2426, 0, 2860, 4271, 0, 0, 0, 0, 0,
    5451, 228, 0, 4843, 1850, 3369, 0, 0, 0, 3387, 0, 0, 4591, 0, 0, 4084,
    2102, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5159, 0, 4831, 0, 3584, 0,
    0, 0, 4518, 4091, 4535, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2601,
    0, 0, 0, 0, 0, 0, 3322, 0, 0, 0, 0, 5322, 1611, 3859, 0, 5430,
    6089, 5899, 2024, 0, 6152, 0, 0, 0, 3683, 0, 0, 0, 0, 0, 5514, 0,
    0, 0, 0, 0, 3764, 0, 1867, 0, 0, 0, 4485, 0, 0, 0, 0, 0,
    3877, 0, 3040, 0, 0, 3748, 2516, 4706, 0, 2264, 0, 1631, 5890, 0, 3062, 4954,
    5669, 0, 0, 0, 0, 3779, 0, 0, 0, 0, 5300, 0, 4835, 0, 0, 0,
    2744, 0, 3718, 0, 0, 0, 4473, 4382, 4791, 0, 5315, 2422, 3693, 0, 5724, 4100,
    3127, 3830, 4033, 0, 0, 0, 0, 0, 3849, 5746, 3451, 0, 5713, 5838, 2768, 0,
    0, 3904, 0, 0, 0, 3647, 0, 0, 3084, 0, 4198, 0, 0, 0, 0, 0,
    2113, 0, 0, 0, 4682, 2921, 0, 0, 0, 0, 2731, 0, 0, 0, 4813, 3366,
    0, 5417, 0, 0, 2026, 4895, 3437, 0, 0, 0, 0, 3596, 5310, 0, 0, 0,
    2980, 0, 0, 0, 0, 0, 4050, 0, 2870, 0, 0, 0, 0, 4400, 0, 0,
    1632, 0, 3713, 0, 3400, 3846, 0, 0, 1998, 0, 0, 4233, 4235, 0, 0, 3305,
    4781, 0, 5911, 5959, 0, 0, 0, 0, 5129, 0, 5918, 0, 0, 0, 0, 0,
    0, 0, 2640, 0, 0, 0, 2557, 3670, 0, 0, 0, 0, 0, 0, 2166, 4365,
    0, 0, 0, 0, 0, 1864, 2512, 0, 0, 4161, 1679, 0, 0, 0, 0, 0,
    0, 2959, 3973, 3477, 0, 3571, 0, 3330, 0, 0, 0, 2208, 4679, 0, 3677, 3921,
    0, 5928, 0, 0, 1805, 0, 0, 0, 0, 3736, 0, 0, 0, 0, 0, 3817,
    0, 0, 0, 0, 5243, 4098, 0, 2970, 3525, 4552, 3548, 0, 0, 3121, 0, 0,
    0, 0, 2191, 0, 3651, 0, 0, 2523, 0, 0, 0, 5492, 0, 0, 0, 88,
    0, 0, 0, 0, 2562, 6032, 2238, 2715, 0, 5368, 5542, 2058, 4887, 3359, 0, 0,
    0, 0, 2169, 0, 2915, 4176, 0, 0, 0, 0, 3513, 0, 0, 0, 0, 0,
    0, 5571, 0, 0, 3914, 0, 3636, 0, 0, 0, 1983, 0, 3581, 4276, 4466, 0,
    0, 0, 0, 0, 5559, 2931, 0, 0, 0, 0, 0, 0, 0, 0, 5086, 5676,
    5050, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5960, 0, 0, 0, 5454,
    3858, 2281, 3502, 0, 0, 0, 2631, 0, 4308, 0, 2511, 3600, 0, 0, 0, 5298,
    0, 0, 0, 0, 5225, 5356, 0, 4731, 0, 3211, 0, 5651, 0, 0, 0, 0,
    3269, 0, 0, 0, 0, 3517, 5281, 4652, 0, 0, 4526, 0, 0, 2730, 0, 4051,
    0, 4179, 3132, 0, 0, 0, 5659, 4428, 2728, 0, 0, 3621, 4309, 0, 0, 1959,
    5947, 0, 5606, 0, 2741, 4060, 0, 0, 0, 0, 4237, 0, 3854, 0, 4718, 0,
    0, 5160, 0, 0, 3995, 6124, 0, 0, 5115, 5600, 0, 0, 0, 4052, 0, 5557,
    5472, 4826, 267, 0, 0, 0, 4345, 0, 0, 0, 0, 3769, 0, 1878, 0, 4671,
    0, 0, 5051, 1860, 0, 0, 1743, 1664, 3280, 0, 5174, 0, 4214, 4131, 2963, 0,
    0, 0, 0, 0, 0, 2858, 0, 3452, 0, 0, 0, 2142, 0, 0, 0, 0,
    0, 0, 207, 0, 0, 4828, 5738, 0, 2650, 2702, 0, 0, 1768, 0, 4069, 0,
    4430, 0, 0, 0, 0, 2781, 0, 0, 0, 0, 0, 0, 3464, 0, 0, 2853,
    0, 0, 0, 0, 0, 0, 0, 4971, 5113, 5339, 0, 0, 1834, 3469, 4579, 0,
    0, 4625, 4357, 2046, 5781, 6090, 6113, 4811, 1862, 0, 0, 0, 0, 5476, 0, 3714,
    0, 0, 0, 2935, 5774, 0, 5170, 0, 1701, 2754, 2653, 0, 4601, 0, 0, 0,
    0, 3937, 0, 0, 3824, 0, 0, 0, 0, 4589, 3794, 0, 2661, 2179, 5377, 0,
    3501, 3623, 0, 0, 0, 2242, 4814, 1824, 0, 0, 0, 0, 0, 0, 4151, 0,
    0, 4195, 0, 0, 0, 0, 0, 0, 4434, 5122, 0, 0, 0, 0, 0, 0,
    0, 4287, 1988, 5289, 0, 3734, 0, 0, 0, 0, 5176, 4071, 0, 0, 5583, 4707,
    0, 5854, 0, 3762, 0, 0, 3450, 4524, 0, 5203, 0, 0, 0, 2555, 0, 4062,
    0, 0, 0, 229, 200, 3467, 0, 5110, 0, 0, 0, 3538, 0, 0, 0, 0,
    5438, 0, 0, 3099, 0, 0, 1990, 0, 5221, 0, 3939, 0, 0, 0, 0, 1914,
    0, 0, 3032, 4755, 0, 0, 0, 0, 0, 0, 0, 0, 3822, 3494, 3753, 3991,
    0, 0, 0, 0, 1853, 0, 0, 1863, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 3402, 0, 279, 4275, 0, 0, 0, 0, 2706, 4575, 0, 0,
    3786, 0, 0, 0, 5617, 0, 0, 0, 0, 0, 102, 0, 3427, 0, 0, 0,
    3137, 0, 5089, 4952, 0, 0, 0, 0, 0, 4938, 0, 0, 4871, 0, 0, 0,
    2310, 0, 5549, 0, 0, 5100, 0, 0, 0, 0, 0, 2965, 2638, 5982, 3281, 4230,
    2755, 3983, 1919, 0, 0, 0, 0, 2806, 0, 4934, 0, 0, 0, 2725, 0, 0,
    3234, 0, 5782, 1833, 0, 0, 0, 4910, 4566, 0, 0, 0, 0, 0, 4009, 0,
    2454, 4608, 5564, 4323, 0, 0, 0, 4810, 0, 0, 0, 0, 0, 3611, 237, 0,
    0, 0, 4087, 0, 4654, 0, 0, 1772, 0, 4144, 0, 0, 0, 4266, 0, 0,
    0, 0, 0, 0, 0, 1832, 0, 0, 4501, 3694, 0, 0, 5742, 0, 0, 0,
    0, 0, 0, 4159, 3717, 0, 0, 0, 2500, 0, 0, 0, 5143, 3001, 6118, 0,
    0, 0, 0, 4243, 4268, 3291, 1847, 0, 5302, 0, 0, 4453, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 3575, 0, 1696, 2334, 3325, 0, 0, 0, 0, 2037, 5162,
    6065, 0, 0, 3790, 0, 4429, 0, 0, 0, 2746, 0, 4675, 1861, 1974, 0, 0,
    0, 0, 0, 2379, 0, 3839, 0, 2750, 2701, 3340, 4104, 0, 0, 0, 3458, 0,
    0, 0, 0, 0, 3711, 0, 0, 0, 0, 0, 0, 3672, 0, 0, 5541, 1782,
    3115, 0, 0, 0, 0, 0, 2668, 6067, 0, 0, 0, 0, 0, 0, 5695, 0,
    0, 0, 3417, 3379, 5464, 0, 5720, 0, 0, 0, 3439, 0, 0, 0, 0, 0,
    2342, 0, 3367, 0, 3965, 0, 0, 3413, 2136, 0, 0, 2757, 4280, 0, 0, 0,
    0, 0, 5082, 2501, 0, 0, 5935, 5764, 0, 0, 4222, 2588, 4667, 4347, 0, 2054,
    2643, 5286, 2132, 0, 0, 3374, 0, 0, 0, 0, 0, 0, 0, 2204, 0, 0,
    4700, 4672, 0, 4157, 0, 1999, 1757, 0, 0, 2083, 4494, 5625, 4951, 0, 5741, 1810,
    3912, 3220, 0, 0, 0, 0, 0, 0, 0, 0, 3633, 0, 0, 0, 0, 3755,
    5609, 0, 0, 5840, 4327, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1781,
    6126, 0, 0, 2682, 0, 0, 2369, 0, 2558, 0, 0, 5316, 1793, 0, 1617, 0,
    0, 0, 0, 0, 3108, 0, 3117, 0, 0, 5584, 0, 4471, 2542, 5493, 6157, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3497, 0, 0, 4900, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 3722, 4872, 1778, 2690, 0, 4729, 0, 4557, 2053,
    5407, 0, 0, 0, 0, 0, 4932, 0, 0, 4543, 0, 3143, 0, 4567, 2928, 0,
    0, 0, 0, 0, 0, 2656, 0, 2036, 5199, 0, 0, 4570, 4392, 0, 0, 0,
    0, 3669, 0, 2760, 0, 2705, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5186,
    1892, 0, 0, 0, 4192, 5106, 5561, 5312, 0, 0, 4242, 0, 0, 0, 0, 4374,
    0, 0, 0, 3652, 0, 0, 0, 0, 0, 1985, 0, 0, 0, 0, 0, 5335,
    3774, 0, 5198, 0, 0, 0, 2556, 0, 4148, 0, 0, 4484, 0, 3254, 0, 4282,
    2538, 0, 5614, 0, 0, 4530, 5085, 2497, 4136, 4306, 5716, 2149, 5715, 0, 0, 4247,
    0, 0, 0, 0, 0, 6145, 0, 3022, 0, 2041, 3916, 0, 0, 4342, 0, 0,
    2801, 0, 2694, 3364, 0, 5275, 0, 0, 0, 0, 4691, 0, 0, 0, 1648, 5342,
    6111, 0, 0, 4279, 0, 0, 0, 0, 4321, 0, 3053, 3996, 2095, 1845, 0, 0,
    4486, 0, 0, 0, 4291, 0, 4200, 2622, 2120, 0, 0, 3259, 5150, 2509, 0, 0,
    4809, 0, 6084, 0, 0, 0, 2652, 0, 0, 0, 4216, 2667, 0, 0, 0, 0,
    4761, 0, 0, 3792, 0, 0, 0, 2087, 3438, 3065, 5292, 4021, 0, 0, 5248, 4680,
    0, 0, 0, 0, 0, 0, 0, 3326, 0, 0, 3089, 0, 0, 2333, 0, 0,
    0, 3389, 2585, 0, 0, 0, 3635, 0, 0, 0, 5267, 0, 3929, 3577, 0, 2946,
    2067, 2004, 0, 0, 0, 5145, 0, 0, 0, 3911, 0, 0, 0, 5274, 0, 2352,
    0, 0, 3018, 2074, 0, 0, 0, 3536, 5103, 0, 3655, 3351, 0, 0, 5623, 0,
    4234, 0, 0, 0, 3894, 0, 0, 0, 0, 0, 4873, 0, 0, 4236, 0, 5654,
    4460, 0, 4068, 0, 5257, 0, 0, 4170, 0, 0, 0, 0, 46, 0, 2423, 0,
    1693, 0, 0, 0, 0, 0, 4627, 0, 0, 0, 4384, 0, 6181, 4184, 3314, 4888,
    3821, 2015, 0, 0, 0, 5195, 3352, 0, 0, 0, 0, 2879, 2940, 0, 3175, 3475,
    2947, 5755, 0, 274, 0, 3724, 2262, 0, 0, 0, 0, 0, 2152, 0, 0, 0,
    0, 0, 2736, 3239, 5112, 5305, 3788, 5830, 0, 5495, 4420, 0, 0, 2467, 0, 0,
    1680, 0, 1622, 0, 5481, 0, 264, 4538, 0, 4829, 0, 0, 0, 0, 0, 3900,
    0, 5452, 2810, 4720, 0, 1840, 0, 0, 0, 210, 0, 0, 0, 5825, 5218, 0,
    0, 0, 5334, 2978, 4380, 1818, 2259, 0, 0, 2758, 3462, 0, 0, 0, 0, 0,
    0, 3300, 0, 5760, 4322, 5144, 3845, 0, 1817, 0, 4673, 0, 0, 2474, 0, 3906,
    0, 0, 0, 0, 0, 0, 0, 0, 2647, 0, 4439, 0, 2842, 0, 3927, 0,
    0, 5204, 0, 2590, 0, 0, 0, 0, 0, 0, 5751, 0, 0, 4187, 4058, 0,
    2300, 5827, 2527, 0, 0, 3235, 0, 4398, 3776, 0, 3899, 0, 4337, 1749, 0, 3459,
    4596, 0, 0, 3453, 4477, 0, 2857, 4180, 4659, 3866, 0, 4043, 0, 0, 0, 0,
    0, 0, 2892, 0, 0, 0, 2839, 5779, 3152, 0, 0, 4440, 4199, 0, 0, 0,
    6049, 1827, 0, 0, 0, 6136, 0, 0, 0, 0, 5866, 0, 0, 3058, 0, 0,
    0, 3046, 0, 0, 0, 0, 5864, 0, 4370, 5030, 5513, 0, 5834, 3263, 0, 0,
    3334, 0, 0, 0, 2472, 4303, 5213, 0, 2807, 0, 3953, 0, 3404, 0, 4041, 4013,
    0, 1966, 0, 0, 5382, 2945, 0, 0, 5591, 0, 0, 2753, 0, 0, 4628, 0,
    5701, 0, 0, 0, 1962, 0, 1794, 4763, 0, 4044, 0, 0, 4411, 0, 0, 0,
    0, 0, 0, 6000, 4531, 0, 5611, 0, 0, 0, 2572, 0, 3116, 0, 0, 5011,
    3443, 0, 2629, 5957, 0, 5844, 2475, 4194, 1755, 0, 1931, 0, 0, 3392, 0, 0,
    6056, 3987, 0, 0, 0, 0, 0, 0, 2488, 0, 2045, 5968, 0, 0, 0, 0,
    0, 0, 0, 3592, 0, 0, 6107, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 3515, 0, 5790, 6159, 3258, 3612, 4149, 0, 0, 2460, 2446, 0, 0, 0, 5520,
    0, 5874, 0, 0, 2150, 0, 0, 3041, 0, 0, 0, 0, 5634, 3011, 5590, 0,
    0, 0, 0, 3562, 0, 3148, 0, 0, 0, 0, 0, 5933, 0, 4267, 0, 3050,
    0, 0, 5898, 4639, 2964, 4231, 0, 0, 0, 3778, 2610, 2982, 0, 0, 0, 0,
    0, 4816, 0, 0, 0, 0, 5714, 2520, 0, 3992, 5722, 0, 2409, 2480, 5045, 2158,
    4933, 5152, 0, 4489, 0, 0, 0, 2529, 79, 0, 4083, 0, 4746, 0, 0, 0,
    0, 0, 0, 0, 6076, 0, 0, 4638, 0, 0, 0, 2626, 0, 0, 2322, 2649,
    0, 4903, 4166, 1972, 2390, 4070, 4011, 0, 4355, 4115, 0, 3256, 0, 0, 0, 0,
    3382, 0, 0, 0, 2392, 3304, 0, 0, 0, 0, 3355, 0, 0, 0, 0, 0,
    2873, 5125, 3732, 0, 4948, 2385, 5944, 4977, 3977, 0, 0, 0, 3589, 0, 4979, 0,
];
